//! Ledger snapshot: balances, allowances and supply as one value.
//!
//! ## State Root
//!
//! The state root is SHA-256 over a canonical encoding:
//!
//! 1. Total supply (16 bytes, little-endian)
//! 2. Balance count (8 bytes LE), then `account ‖ balance` in ascending account order
//! 3. Allowance count (8 bytes LE), then `owner ‖ spender ‖ allowance` in
//!    ascending (owner, spender) order
//!
//! Zero entries are never stored, so the root depends only on the settled
//! values, not on the operations that produced them.

use sha2::{Digest, Sha256};

use crate::ledger::{AllowanceLedger, BalanceLedger, SupplyTracker};
use crate::types::{Account, Amount};

/// Complete ledger state for one token instance.
///
/// Read access is public; mutation goes through the engine's transition
/// logic only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerState {
    pub(crate) balances: BalanceLedger,
    pub(crate) allowances: AllowanceLedger,
    pub(crate) supply: SupplyTracker,
}

impl LedgerState {
    /// Empty ledger: no balances, no allowances, zero supply
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn total_supply(&self) -> Amount {
        self.supply.total()
    }

    #[inline]
    pub fn balance_of(&self, account: &Account) -> Amount {
        self.balances.get(account)
    }

    #[inline]
    pub fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.allowances.get(owner, spender)
    }

    pub fn balances(&self) -> &BalanceLedger {
        &self.balances
    }

    pub fn allowances(&self) -> &AllowanceLedger {
        &self.allowances
    }

    pub fn supply(&self) -> &SupplyTracker {
        &self.supply
    }

    /// Check that the balances add up to the total supply
    pub fn is_conserved(&self) -> bool {
        self.balances.sum() == Some(self.supply.total())
    }

    /// Compute the SHA-256 state root
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hasher.update(self.supply.total().to_le_bytes());

        hasher.update((self.balances.holders() as u64).to_le_bytes());
        for (account, balance) in self.balances.iter() {
            hasher.update(account.as_bytes());
            hasher.update(balance.to_le_bytes());
        }

        hasher.update((self.allowances.len() as u64).to_le_bytes());
        for ((owner, spender), allowance) in self.allowances.iter() {
            hasher.update(owner.as_bytes());
            hasher.update(spender.as_bytes());
            hasher.update(allowance.to_le_bytes());
        }

        hasher.finalize().into()
    }
}
