//! Ledger receipt summarizing engine activity.
//!
//! The LedgerReceipt captures counters and the state root after a run of
//! operations, so two engines can be compared without exchanging their
//! full balance tables.

use ssz_rs::prelude::*;
use sha2::{Sha256, Digest};

/// Receipt summarizing the operations processed by a token engine.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash of the canonical ledger
/// encoding (supply, balances, allowances). Identical ledgers always
/// produce identical roots.
///
/// ## Example
///
/// ```
/// use token_ledger::types::LedgerReceipt;
///
/// let receipt = LedgerReceipt::new(
///     10,                     // sequence
///     8,                      // operations_applied
///     2,                      // operations_rejected
///     8,                      // events_emitted
///     1_000,                  // total_supply
///     [0u8; 32],              // state_root (would be computed)
/// );
/// assert_eq!(receipt.operations_total(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct LedgerReceipt {
    /// Number of operations submitted so far
    pub sequence: u64,

    /// Operations that committed
    pub operations_applied: u64,

    /// Operations rejected with an error (no state change)
    pub operations_rejected: u64,

    /// Events appended to the log
    pub events_emitted: u64,

    /// Total supply at the time of the receipt
    pub total_supply: u128,

    /// State root after execution (SHA-256 hash, 32 bytes)
    pub state_root: [u8; 32],
}

impl LedgerReceipt {
    /// Create a new ledger receipt
    pub fn new(
        sequence: u64,
        operations_applied: u64,
        operations_rejected: u64,
        events_emitted: u64,
        total_supply: u128,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            sequence,
            operations_applied,
            operations_rejected,
            events_emitted,
            total_supply,
            state_root,
        }
    }

    /// Compute SHA-256 hash of the given data
    ///
    /// Returns a 32-byte array suitable for use as a state root.
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        hasher.finalize().into()
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Applied plus rejected
    pub fn operations_total(&self) -> u64 {
        self.operations_applied + self.operations_rejected
    }

    /// Check if no operation has been processed
    pub fn is_empty(&self) -> bool {
        self.operations_total() == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
