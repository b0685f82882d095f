//! Thread-safe handle to a token engine.
//!
//! Writers take the lock for the whole operation, so no reader ever sees a
//! half-applied transfer. Readers share the lock and only see settled state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::{Operation, TokenEngine};
use crate::error::Result;
use crate::types::{Account, Amount, Event, LedgerReceipt};

/// Cloneable handle; all clones point at the same engine
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<TokenEngine>>,
}

impl SharedEngine {
    pub fn new(engine: TokenEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn execute(&self, caller: Account, op: Operation) -> Result<bool> {
        self.inner.write().execute(caller, op)
    }

    pub fn approve(&self, caller: Account, spender: Account, amount: Amount) -> Result<bool> {
        self.inner.write().approve(caller, spender, amount)
    }

    pub fn transfer(&self, caller: Account, to: Account, amount: Amount) -> Result<bool> {
        self.inner.write().transfer(caller, to, amount)
    }

    pub fn transfer_from(
        &self,
        caller: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<bool> {
        self.inner.write().transfer_from(caller, from, to, amount)
    }

    pub fn purchase(&self, to: Account, amount: Amount) -> Result<bool> {
        self.inner.write().purchase(to, amount)
    }

    pub fn total_supply(&self) -> Amount {
        self.inner.read().total_supply()
    }

    pub fn balance_of(&self, account: &Account) -> Amount {
        self.inner.read().balance_of(account)
    }

    pub fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.inner.read().allowance(owner, spender)
    }

    /// Copy of the events emitted at or after `index`
    pub fn events_since(&self, index: usize) -> Vec<Event> {
        self.inner.read().events().since(index).to_vec()
    }

    pub fn receipt(&self) -> LedgerReceipt {
        self.inner.read().receipt()
    }

    /// Run `f` against a consistent snapshot under the read lock
    pub fn with_engine<R>(&self, f: impl FnOnce(&TokenEngine) -> R) -> R {
        let engine = self.inner.read();
        f(&*engine)
    }
}
