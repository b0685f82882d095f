//! Allowance ledger: (owner, spender) to remaining spend limit.
//!
//! Setting an allowance always overwrites. An owner spending their own funds
//! never touches this ledger.

use std::collections::BTreeMap;

use crate::error::{LedgerError, Result};
use crate::types::{Account, Amount};

/// Owner-granted spending limits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowanceLedger {
    allowances: BTreeMap<(Account, Account), Amount>,
}

impl AllowanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining allowance, 0 when never set
    #[inline]
    pub fn get(&self, owner: &Account, spender: &Account) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the allowance. Setting 0 clears it.
    pub fn set(&mut self, owner: &Account, spender: &Account, amount: Amount) {
        if amount == 0 {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
    }

    /// Allowance left after spending `amount`, without applying it.
    ///
    /// Returns `None` for self-spends, which are never checked or charged.
    pub fn checked_consume(
        &self,
        owner: &Account,
        spender: &Account,
        amount: Amount,
    ) -> Result<Option<Amount>> {
        if owner == spender {
            return Ok(None);
        }

        let allowance = self.get(owner, spender);
        allowance
            .checked_sub(amount)
            .map(Some)
            .ok_or(LedgerError::InsufficientAllowance {
                owner: *owner,
                spender: *spender,
                allowance,
                required: amount,
            })
    }

    /// Spend `amount` of the allowance `owner` granted `spender`.
    ///
    /// When `owner == spender` this succeeds without reading or decrementing
    /// any stored value. Otherwise every unit is deducted; there is no
    /// unlimited-allowance sentinel.
    ///
    /// # Errors
    ///
    /// `InsufficientAllowance` if `amount` exceeds the allowance; the ledger
    /// is left untouched.
    pub fn consume(&mut self, owner: &Account, spender: &Account, amount: Amount) -> Result<()> {
        if let Some(remaining) = self.checked_consume(owner, spender, amount)? {
            self.set(owner, spender, remaining);
        }
        Ok(())
    }

    /// Number of non-zero allowances
    pub fn len(&self) -> usize {
        self.allowances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowances.is_empty()
    }

    /// Non-zero allowances in ascending (owner, spender) order
    pub fn iter(&self) -> impl Iterator<Item = (&(Account, Account), &Amount)> {
        self.allowances.iter()
    }
}
