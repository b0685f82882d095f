//! The ledger transition function.
//!
//! ## Transition Rules
//!
//! | Operation      | Zero amount                 | Non-zero amount                          |
//! |----------------|-----------------------------|------------------------------------------|
//! | `approve`      | overwrite, emit `Approval`  | overwrite, emit `Approval`               |
//! | `transfer`     | no mutation, emit `Transfer`| debit caller, credit `to`                |
//! | `transferFrom` | no mutation, emit `Transfer`| consume allowance, debit `from`, credit `to` |
//! | `purchase`     | emit mint `Transfer`        | credit `to`, grow supply                 |
//!
//! Every precondition is validated before the first write, so a rejected
//! operation leaves the state untouched. Check order decides which error
//! is reported: allowance before balance.

use crate::engine::Operation;
use crate::error::Result;
use crate::ledger::LedgerState;
use crate::types::{Account, Amount, Event};

/// Result of applying one operation to a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the operation
    pub state: LedgerState,

    /// Events emitted, in order
    pub events: Vec<Event>,

    /// ERC-20 return value
    pub success: bool,
}

/// Apply `op` on behalf of `caller` to a copy of `state`.
///
/// The input snapshot is never modified; on error there is no new state.
///
/// # Example
///
/// ```
/// use token_ledger::engine::{transition, Operation};
/// use token_ledger::ledger::LedgerState;
/// use token_ledger::types::Account;
///
/// let alice = Account::from_low_u64(1);
/// let genesis = LedgerState::new();
///
/// let minted = transition(&genesis, Account::ZERO, &Operation::Purchase { to: alice, amount: 5 }).unwrap();
/// assert_eq!(minted.state.balance_of(&alice), 5);
/// assert_eq!(genesis.balance_of(&alice), 0);
/// ```
pub fn transition(state: &LedgerState, caller: Account, op: &Operation) -> Result<Transition> {
    let mut next = state.clone();
    let events = next.apply(caller, op)?;
    Ok(Transition {
        state: next,
        events,
        success: true,
    })
}

impl LedgerState {
    /// Apply `op` in place on behalf of `caller`.
    ///
    /// Either every write happens and the events are returned, or the call
    /// fails and `self` is unchanged.
    pub fn apply(&mut self, caller: Account, op: &Operation) -> Result<Vec<Event>> {
        let event = match *op {
            Operation::Approve { spender, amount } => self.apply_approve(caller, spender, amount),
            Operation::Transfer { to, amount } => self.apply_transfer(caller, to, amount)?,
            Operation::TransferFrom { from, to, amount } => {
                self.apply_transfer_from(caller, from, to, amount)?
            }
            Operation::Purchase { to, amount } => self.apply_purchase(to, amount)?,
        };
        Ok(vec![event])
    }

    fn apply_approve(&mut self, owner: Account, spender: Account, amount: Amount) -> Event {
        // Emitted even when the stored value does not change
        self.allowances.set(&owner, &spender, amount);
        Event::approval(owner, spender, amount)
    }

    fn apply_transfer(&mut self, caller: Account, to: Account, amount: Amount) -> Result<Event> {
        if amount == 0 {
            return Ok(Event::transfer(caller, to, 0));
        }

        self.check_move(&caller, &to, amount)?;
        self.commit_move(&caller, &to, amount)?;
        Ok(Event::transfer(caller, to, amount))
    }

    fn apply_transfer_from(
        &mut self,
        spender: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<Event> {
        // Zero-value notification does not depend on approval or funds
        if amount == 0 {
            return Ok(Event::transfer(from, to, 0));
        }

        self.allowances.checked_consume(&from, &spender, amount)?;
        self.check_move(&from, &to, amount)?;

        self.allowances.consume(&from, &spender, amount)?;
        self.commit_move(&from, &to, amount)?;
        Ok(Event::transfer(from, to, amount))
    }

    fn apply_purchase(&mut self, to: Account, amount: Amount) -> Result<Event> {
        self.balances.checked_credit(&to, amount)?;
        self.supply.checked_increase(amount)?;

        self.balances.credit(&to, amount)?;
        self.supply.increase(amount)?;
        Ok(Event::transfer(Account::ZERO, to, amount))
    }

    /// Validate a debit of `from` followed by a credit of `to`.
    fn check_move(&self, from: &Account, to: &Account, amount: Amount) -> Result<()> {
        self.balances.checked_debit(from, amount)?;
        // A self-move credits back what was just debited and cannot overflow
        if from != to {
            self.balances.checked_credit(to, amount)?;
        }
        Ok(())
    }

    /// Debit then credit. Self-moves run both steps and net to zero.
    fn commit_move(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<()> {
        self.balances.debit(from, amount)?;
        self.balances.credit(to, amount)?;
        Ok(())
    }
}
