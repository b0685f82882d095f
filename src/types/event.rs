//! Event records emitted by the token engine.
//!
//! ## SSZ Serialization
//!
//! Events derive `SimpleSerialize` so an event stream has one canonical byte
//! encoding. The kind and both accounts are stored raw, the same way the
//! engine stores enums elsewhere, and exposed through typed accessors.
//!
//! ## Layout
//!
//! | Field     | Bytes |
//! |-----------|-------|
//! | kind_raw  | 1     |
//! | first     | 20    |
//! | second    | 20    |
//! | value     | 16    |
//!
//! `first`/`second` are `from`/`to` for a transfer and `owner`/`spender` for
//! an approval.

use ssz_rs::prelude::*;

use crate::types::{Account, Amount, ACCOUNT_LEN};

// ============================================================================
// EventKind enum
// ============================================================================

/// Kind of notification
///
/// Represented as u8 for SSZ compatibility:
/// - Transfer = 0
/// - Approval = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventKind {
    /// Balance movement, including mints and zero-value transfers
    #[default]
    Transfer,
    /// Allowance set by an owner for a spender
    Approval,
}

impl EventKind {
    /// Convert to u8 for serialization
    pub fn to_u8(self) -> u8 {
        match self {
            EventKind::Transfer => 0,
            EventKind::Approval => 1,
        }
    }

    /// Convert from u8 for deserialization
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EventKind::Transfer),
            1 => Some(EventKind::Approval),
            _ => None,
        }
    }
}

// ============================================================================
// Event struct
// ============================================================================

/// An immutable notification record.
///
/// ## Example
///
/// ```
/// use token_ledger::types::{Account, Event, EventKind};
///
/// let alice = Account::from_low_u64(1);
/// let bob = Account::from_low_u64(2);
///
/// let event = Event::transfer(alice, bob, 10);
/// assert_eq!(event.kind(), EventKind::Transfer);
/// assert_eq!(event.from(), alice);
/// assert_eq!(event.to(), bob);
/// assert_eq!(event.value, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Event {
    /// Event kind as u8 (0=Transfer, 1=Approval)
    pub kind_raw: u8,

    /// Transfer source or approval owner
    pub first: [u8; ACCOUNT_LEN],

    /// Transfer destination or approval spender
    pub second: [u8; ACCOUNT_LEN],

    /// Amount moved, or the new allowance
    pub value: u128,
}

impl Event {
    /// `Transfer{from, to, value}`
    pub fn transfer(from: Account, to: Account, value: Amount) -> Self {
        Self {
            kind_raw: EventKind::Transfer.to_u8(),
            first: from.0,
            second: to.0,
            value,
        }
    }

    /// `Approval{owner, spender, value}`
    pub fn approval(owner: Account, spender: Account, value: Amount) -> Self {
        Self {
            kind_raw: EventKind::Approval.to_u8(),
            first: owner.0,
            second: spender.0,
            value,
        }
    }

    /// Get the event kind
    pub fn kind(&self) -> EventKind {
        EventKind::from_u8(self.kind_raw).unwrap_or(EventKind::Transfer)
    }

    #[inline]
    pub fn is_transfer(&self) -> bool {
        self.kind() == EventKind::Transfer
    }

    #[inline]
    pub fn is_approval(&self) -> bool {
        self.kind() == EventKind::Approval
    }

    /// Transfer source
    pub fn from(&self) -> Account {
        Account(self.first)
    }

    /// Transfer destination
    pub fn to(&self) -> Account {
        Account(self.second)
    }

    /// Approval owner (same slot as `from`)
    pub fn owner(&self) -> Account {
        Account(self.first)
    }

    /// Approval spender (same slot as `to`)
    pub fn spender(&self) -> Account {
        Account(self.second)
    }

    /// A transfer whose source is the zero account
    pub fn is_mint(&self) -> bool {
        self.is_transfer() && self.from().is_zero()
    }

    /// Check whether `account` appears on either side of the event
    pub fn involves(&self, account: &Account) -> bool {
        self.first == account.0 || self.second == account.0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
