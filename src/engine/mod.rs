//! Transfer engine for the token ledger.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same operations in the same order always give the same state root
//! 2. **Atomicity**: A call either fully commits with its event or changes nothing
//! 3. **Checked Math**: No wrapping or saturating arithmetic on amounts
//! 4. **Synchronous Execution**: One operation completes before the next starts
//!
//! ## Components
//!
//! - [`transition`]: Pure `(state, caller, operation) -> (state, events, success)`
//! - [`TokenEngine`]: Owns one state and its event log, exposes the ERC-20 surface
//! - [`SharedEngine`]: Read/write locked handle for concurrent hosts
//!
//! ## Example
//!
//! ```
//! use token_ledger::engine::TokenEngine;
//! use token_ledger::error::ErrorKind;
//! use token_ledger::types::Account;
//!
//! let owner = Account::from_low_u64(1);
//! let spender = Account::from_low_u64(2);
//! let recipient = Account::from_low_u64(3);
//!
//! let mut engine = TokenEngine::default();
//! engine.purchase(owner, 10).unwrap();
//! engine.approve(owner, spender, 5).unwrap();
//!
//! engine.transfer_from(spender, owner, recipient, 3).unwrap();
//! assert_eq!(engine.allowance(&owner, &spender), 2);
//!
//! let err = engine.transfer_from(spender, owner, recipient, 3).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InsufficientAllowance);
//! ```

pub mod operation;
pub mod shared;
pub mod token;
pub mod transition;

pub use operation::Operation;
pub use shared::SharedEngine;
pub use token::TokenEngine;
pub use transition::{transition, Transition};
