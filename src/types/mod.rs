//! Core data types for the token ledger
//!
//! Events and receipts implement SSZ serialization for deterministic encoding.
//! Amounts are unsigned integers in base units; see [`units`] for conversion
//! to and from human-readable token quantities.
//!
//! ## Types
//!
//! - [`Account`]: A 20-byte account address
//! - [`Amount`]: Token amount in base units
//! - [`Event`]: A `Transfer` or `Approval` notification
//! - [`LedgerReceipt`]: Engine activity summary with the state root
//! - [`TokenMetadata`]: Name, symbol and decimals

mod account;
mod event;
mod metadata;
mod receipt;
pub mod units;

/// Token amount in base units. The representable maximum is `u128::MAX`.
pub type Amount = u128;

// Re-export all types at module level
pub use account::{Account, ACCOUNT_LEN};
pub use event::{Event, EventKind};
pub use metadata::TokenMetadata;
pub use receipt::LedgerReceipt;
