//! # Token Ledger
//!
//! Deterministic accounting engine for an ERC-20 class fungible token.
//!
//! ## Architecture
//!
//! The ledger consists of:
//! - **Types**: Core data structures (Account, Event, LedgerReceipt)
//! - **Ledger**: Balance ledger, allowance ledger and supply tracker
//! - **Engine**: Transition function and the ERC-20 call surface
//! - **Events**: Append-only `Transfer` / `Approval` log
//!
//! ## Design Principles
//!
//! 1. **Determinism**: All operations produce identical results for identical inputs
//! 2. **Conservation**: The sum of all balances always equals total supply
//! 3. **Atomicity**: A rejected call leaves no trace in state or events
//! 4. **Synchronous Execution**: Single-writer, no async in the transition path
//!
//! ## Example
//!
//! ```
//! use token_ledger::{Account, TokenEngine};
//!
//! let alice = Account::from_low_u64(1);
//! let bob = Account::from_low_u64(2);
//!
//! let mut engine = TokenEngine::default();
//! engine.purchase(alice, 100).unwrap();
//! engine.transfer(alice, bob, 40).unwrap();
//!
//! assert_eq!(engine.total_supply(), 100);
//! assert_eq!(engine.balance_of(&alice) + engine.balance_of(&bob), 100);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Account, Event, LedgerReceipt
pub mod types;

/// Balance and allowance ledgers, supply tracker
pub mod ledger;

/// Transfer engine: transition function and ERC-20 operations
pub mod engine;

/// Event log
pub mod events;

/// Engine configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::LedgerConfig;
pub use engine::{transition, Operation, SharedEngine, TokenEngine, Transition};
pub use error::{ErrorKind, LedgerError, Result};
pub use events::EventLog;
pub use ledger::LedgerState;
pub use types::{Account, Amount, Event, EventKind, LedgerReceipt, TokenMetadata};
