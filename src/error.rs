//! Error types for ledger operations

use thiserror::Error;

use crate::types::{Account, Amount};

/// Ledger result type
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Reasons an operation is rejected.
///
/// A rejected operation leaves balances, allowances, supply and the event
/// log exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Debit exceeds available funds
    #[error("Insufficient balance for {account}: balance {balance}, required {required}")]
    InsufficientBalance {
        /// Account being debited
        account: Account,
        /// Balance at the time of the call
        balance: Amount,
        /// Amount requested
        required: Amount,
    },

    /// Spend exceeds the remaining approved amount
    #[error("Insufficient allowance from {owner} to {spender}: allowance {allowance}, required {required}")]
    InsufficientAllowance {
        /// Funds owner
        owner: Account,
        /// Spender acting on the owner's behalf
        spender: Account,
        /// Allowance at the time of the call
        allowance: Amount,
        /// Amount requested
        required: Amount,
    },

    /// Credit or supply increase would exceed `Amount::MAX`
    #[error("Arithmetic overflow")]
    Overflow,
}

/// Fieldless view of [`LedgerError`] for comparing failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InsufficientBalance,
    InsufficientAllowance,
    Overflow,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::InsufficientBalance { .. } => ErrorKind::InsufficientBalance,
            LedgerError::InsufficientAllowance { .. } => ErrorKind::InsufficientAllowance,
            LedgerError::Overflow => ErrorKind::Overflow,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file or environment value is malformed
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
