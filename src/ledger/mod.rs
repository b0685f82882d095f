//! Ledger storage for the token engine.
//!
//! ## Components
//!
//! - [`BalanceLedger`]: account → balance, absent means zero
//! - [`AllowanceLedger`]: (owner, spender) → remaining allowance
//! - [`SupplyTracker`]: total supply, grown only by minting
//! - [`LedgerState`]: the three together, with the state root
//!
//! All maps are `BTreeMap`s so iteration order, and therefore the state
//! root, is deterministic.
//!
//! ## Example
//!
//! ```
//! use token_ledger::ledger::BalanceLedger;
//! use token_ledger::types::Account;
//!
//! let alice = Account::from_low_u64(1);
//! let mut balances = BalanceLedger::new();
//!
//! balances.credit(&alice, 10).unwrap();
//! balances.debit(&alice, 4).unwrap();
//! assert_eq!(balances.get(&alice), 6);
//! assert!(balances.debit(&alice, 7).is_err());
//! ```

pub mod allowances;
pub mod balances;
pub mod state;
pub mod supply;

pub use allowances::AllowanceLedger;
pub use balances::BalanceLedger;
pub use state::LedgerState;
pub use supply::SupplyTracker;
