//! Event emission.
//!
//! Every committed call appends exactly one record, in call order:
//!
//! - `approve` → `Approval{owner, spender, value}`, even when unchanged
//! - `transfer` / `transferFrom` → `Transfer{from, to, value}`, even for zero
//! - `purchase` → `Transfer{from: zero account, to, value}`
//!
//! Rejected calls append nothing. Records are never modified or removed.

pub mod log;

pub use log::EventLog;
