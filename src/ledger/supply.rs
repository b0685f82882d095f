//! Total supply counter. Only minting moves it.

use crate::error::{LedgerError, Result};
use crate::types::Amount;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplyTracker {
    total: Amount,
}

impl SupplyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Supply after minting `amount`, without applying it
    pub fn checked_increase(&self, amount: Amount) -> Result<Amount> {
        self.total.checked_add(amount).ok_or(LedgerError::Overflow)
    }

    /// Grow the supply. Fails with `Overflow` and leaves it unchanged.
    pub fn increase(&mut self, amount: Amount) -> Result<Amount> {
        self.total = self.checked_increase(amount)?;
        Ok(self.total)
    }
}
