//! State-changing calls accepted by the engine.
//!
//! The caller is not part of the operation; the execution context supplies
//! it alongside.

use crate::types::{Account, Amount};

/// A state-changing call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Set the caller's allowance for `spender`
    Approve { spender: Account, amount: Amount },

    /// Move the caller's funds to `to`
    Transfer { to: Account, amount: Amount },

    /// Move `from`'s funds to `to`, spending the caller's allowance
    TransferFrom { from: Account, to: Account, amount: Amount },

    /// Mint `amount` to `to`, growing the supply
    Purchase { to: Account, amount: Amount },
}

impl Operation {
    /// ERC-20 style method name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Approve { .. } => "approve",
            Operation::Transfer { .. } => "transfer",
            Operation::TransferFrom { .. } => "transferFrom",
            Operation::Purchase { .. } => "purchase",
        }
    }

    /// Amount carried by the operation
    pub fn amount(&self) -> Amount {
        match *self {
            Operation::Approve { amount, .. }
            | Operation::Transfer { amount, .. }
            | Operation::TransferFrom { amount, .. }
            | Operation::Purchase { amount, .. } => amount,
        }
    }

    /// Whether the operation can change total supply
    pub fn is_mint(&self) -> bool {
        matches!(self, Operation::Purchase { .. })
    }
}
