//! Balance ledger: account to balance.
//!
//! Missing entries read as zero and zero balances are never stored, so two
//! ledgers holding the same balances compare equal however they got there.

use std::collections::BTreeMap;

use crate::error::{LedgerError, Result};
use crate::types::{Account, Amount};

/// Per-account balances
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceLedger {
    balances: BTreeMap<Account, Amount>,
}

impl BalanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance, 0 for unknown accounts
    #[inline]
    pub fn get(&self, account: &Account) -> Amount {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Balance `account` would have after a credit, without applying it
    pub fn checked_credit(&self, account: &Account, amount: Amount) -> Result<Amount> {
        self.get(account)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)
    }

    /// Balance `account` would have after a debit, without applying it
    pub fn checked_debit(&self, account: &Account, amount: Amount) -> Result<Amount> {
        let balance = self.get(account);
        balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                account: *account,
                balance,
                required: amount,
            })
    }

    /// Increase a balance
    ///
    /// # Errors
    ///
    /// `Overflow` if the new balance exceeds `Amount::MAX`; the ledger is
    /// left untouched.
    pub fn credit(&mut self, account: &Account, amount: Amount) -> Result<Amount> {
        let updated = self.checked_credit(account, amount)?;
        self.write(account, updated);
        Ok(updated)
    }

    /// Decrease a balance
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if `amount` exceeds the balance; the ledger is
    /// left untouched.
    pub fn debit(&mut self, account: &Account, amount: Amount) -> Result<Amount> {
        let updated = self.checked_debit(account, amount)?;
        self.write(account, updated);
        Ok(updated)
    }

    /// Number of accounts with a non-zero balance
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Non-zero balances in ascending account order
    pub fn iter(&self) -> impl Iterator<Item = (&Account, &Amount)> {
        self.balances.iter()
    }

    /// Sum of every balance, `None` if it would overflow
    pub fn sum(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(0u128, |acc, balance| acc.checked_add(*balance))
    }

    fn write(&mut self, account: &Account, balance: Amount) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
    }
}
