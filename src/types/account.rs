//! Account identifiers.
//!
//! An account is an opaque 20-byte address. Two accounts are equal only when
//! their bytes are identical; ordering is plain byte ordering, which keeps
//! ledger iteration (and therefore the state root) deterministic.

use std::fmt;

/// Length of an account identifier in bytes
pub const ACCOUNT_LEN: usize = 20;

/// A 20-byte account address.
///
/// ## Example
///
/// ```
/// use token_ledger::types::Account;
///
/// let alice = Account::from_low_u64(1);
/// assert_eq!(alice.to_hex(), "0x0000000000000000000000000000000000000001");
/// assert_eq!(Account::from_hex(&alice.to_hex()), Some(alice));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Account(pub [u8; ACCOUNT_LEN]);

impl Account {
    /// The all-zero account. Used as the `from` side of mint notifications.
    pub const ZERO: Account = Account([0u8; ACCOUNT_LEN]);

    /// Wrap raw address bytes
    pub const fn new(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }

    /// Build an account whose low 8 bytes hold `value` big-endian.
    ///
    /// Handy for tests and demos where readable identities matter more than
    /// realistic addresses.
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; ACCOUNT_LEN];
        bytes[ACCOUNT_LEN - 8..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Parse a hex address, with or without a `0x` prefix.
    ///
    /// Returns `None` unless the input decodes to exactly 20 bytes.
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let decoded = hex::decode(digits).ok()?;
        let bytes: [u8; ACCOUNT_LEN] = decoded.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Raw address bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8; ACCOUNT_LEN] {
        &self.0
    }

    /// `0x`-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Check whether this is the zero account
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl From<[u8; ACCOUNT_LEN]> for Account {
    fn from(bytes: [u8; ACCOUNT_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account({})", self.to_hex())
    }
}
