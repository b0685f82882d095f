//! Token metadata: ERC-20 `name()`, `symbol()`, `decimals()`.
//!
//! Metadata is fixed when an engine is constructed and never influences
//! transfer semantics.

use serde::{Deserialize, Serialize};

use crate::types::units::{self, DEFAULT_DECIMALS};
use crate::types::Amount;

/// Descriptive token properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenMetadata {
    /// Human-readable token name
    pub name: String,

    /// Ticker symbol
    pub symbol: String,

    /// Base units per whole token, as a power of ten
    pub decimals: u8,
}

impl Default for TokenMetadata {
    fn default() -> Self {
        Self {
            name: "Ledger Token".to_string(),
            symbol: "LGT".to_string(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl TokenMetadata {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Render an amount as `"<whole tokens> <SYMBOL>"`.
    ///
    /// Falls back to raw base units when the amount cannot be expressed as a
    /// decimal at this precision.
    pub fn format_amount(&self, amount: Amount) -> String {
        match units::from_base_units_trimmed(amount, self.decimals) {
            Some(value) => format!("{} {}", value, self.symbol),
            None => format!("{} base units of {}", amount, self.symbol),
        }
    }
}
