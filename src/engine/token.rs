//! Token engine: one ledger state, its event log, and the ERC-20 surface.

use tracing::{debug, info, warn};

use crate::config::LedgerConfig;
use crate::engine::Operation;
use crate::error::Result;
use crate::events::EventLog;
use crate::ledger::LedgerState;
use crate::types::{Account, Amount, LedgerReceipt, TokenMetadata};

/// ERC-20 class token engine.
///
/// Owns the ledger state and the event log for a single token instance.
/// Every mutating call is one atomic transition: on `Err` nothing changed
/// and no event was appended.
///
/// ## Example
///
/// ```
/// use token_ledger::engine::TokenEngine;
/// use token_ledger::types::{Account, Event, TokenMetadata};
///
/// let alice = Account::from_low_u64(1);
/// let bob = Account::from_low_u64(2);
///
/// let mut engine = TokenEngine::new(TokenMetadata::default());
/// engine.purchase(alice, 3).unwrap();
///
/// assert!(engine.transfer(alice, bob, 1).unwrap());
/// assert_eq!(engine.balance_of(&alice), 2);
/// assert_eq!(engine.balance_of(&bob), 1);
/// assert_eq!(engine.events().last(), Some(&Event::transfer(alice, bob, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct TokenEngine {
    metadata: TokenMetadata,
    state: LedgerState,
    log: EventLog,

    /// Operations submitted, applied or not
    sequence: u64,
    operations_applied: u64,
    operations_rejected: u64,
}

impl Default for TokenEngine {
    fn default() -> Self {
        Self::new(TokenMetadata::default())
    }
}

impl TokenEngine {
    /// Create an engine with an empty ledger
    pub fn new(metadata: TokenMetadata) -> Self {
        Self::from_config(&LedgerConfig {
            token: metadata,
            ..LedgerConfig::default()
        })
    }

    /// Create an engine from configuration
    pub fn from_config(config: &LedgerConfig) -> Self {
        info!(
            name = %config.token.name,
            symbol = %config.token.symbol,
            decimals = config.token.decimals,
            "token engine created"
        );
        Self {
            metadata: config.token.clone(),
            state: LedgerState::new(),
            log: EventLog::with_capacity(config.event_log_capacity),
            sequence: 0,
            operations_applied: 0,
            operations_rejected: 0,
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Apply `op` on behalf of `caller` and append its events.
    ///
    /// Returns the ERC-20 success flag, which is always `true` when the call
    /// commits. Rejections come back as `Err`.
    pub fn execute(&mut self, caller: Account, op: Operation) -> Result<bool> {
        self.sequence += 1;

        match self.state.apply(caller, &op) {
            Ok(events) => {
                debug!(
                    seq = self.sequence,
                    op = op.name(),
                    caller = %caller,
                    amount = %op.amount(),
                    events = events.len(),
                    "operation applied"
                );
                if op.is_mint() {
                    info!(
                        amount = %op.amount(),
                        total_supply = %self.state.total_supply(),
                        "minted"
                    );
                }
                self.log.extend(events);
                self.operations_applied += 1;
                Ok(true)
            }
            Err(err) => {
                warn!(
                    seq = self.sequence,
                    op = op.name(),
                    caller = %caller,
                    kind = ?err.kind(),
                    "operation rejected: {}",
                    err
                );
                self.operations_rejected += 1;
                Err(err)
            }
        }
    }

    /// Set `caller`'s allowance for `spender` to exactly `amount`.
    ///
    /// Never fails. Emits `Approval` every time, even when the value is
    /// unchanged.
    pub fn approve(&mut self, caller: Account, spender: Account, amount: Amount) -> Result<bool> {
        self.execute(caller, Operation::Approve { spender, amount })
    }

    /// Move `amount` from `caller` to `to`.
    ///
    /// Zero amounts always succeed and still emit `Transfer`.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` if `caller` holds less than `amount`.
    pub fn transfer(&mut self, caller: Account, to: Account, amount: Amount) -> Result<bool> {
        self.execute(caller, Operation::Transfer { to, amount })
    }

    /// Move `amount` from `from` to `to`, spending `caller`'s allowance.
    ///
    /// Zero amounts always succeed, approved or not. When `caller == from` no
    /// allowance is needed or consumed.
    ///
    /// # Errors
    ///
    /// - `InsufficientAllowance` if `caller != from` and the allowance is short
    /// - `InsufficientBalance` if `from` holds less than `amount`
    pub fn transfer_from(
        &mut self,
        caller: Account,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<bool> {
        self.execute(caller, Operation::TransferFrom { from, to, amount })
    }

    /// Mint `amount` to `to`, growing the total supply by the same amount.
    ///
    /// # Errors
    ///
    /// `Overflow` if the balance or the supply would exceed `Amount::MAX`.
    pub fn purchase(&mut self, to: Account, amount: Amount) -> Result<bool> {
        self.execute(Account::ZERO, Operation::Purchase { to, amount })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn total_supply(&self) -> Amount {
        self.state.total_supply()
    }

    #[inline]
    pub fn balance_of(&self, account: &Account) -> Amount {
        self.state.balance_of(account)
    }

    #[inline]
    pub fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.state.allowance(owner, spender)
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.metadata.decimals
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    /// Read-only view of the ledger
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// Read-only view of the event log
    pub fn events(&self) -> &EventLog {
        &self.log
    }

    pub fn state_root(&self) -> [u8; 32] {
        self.state.state_root()
    }

    /// Summarize activity so far
    pub fn receipt(&self) -> LedgerReceipt {
        LedgerReceipt::new(
            self.sequence,
            self.operations_applied,
            self.operations_rejected,
            self.log.len() as u64,
            self.state.total_supply(),
            self.state.state_root(),
        )
    }
}
