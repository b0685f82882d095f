//! Configuration for a token engine

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::units::MAX_DECIMALS;
use crate::types::TokenMetadata;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Token name, symbol and decimals
    pub token: TokenMetadata,

    /// Events to reserve room for up front
    pub event_log_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            token: TokenMetadata::default(),
            event_log_capacity: 1024,
        }
    }
}

impl LedgerConfig {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: LedgerConfig = toml::from_str(content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from environment variables
    ///
    /// Reads `TOKEN_NAME`, `TOKEN_SYMBOL` and `TOKEN_DECIMALS`; anything unset
    /// keeps its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = LedgerConfig::default();

        if let Ok(name) = std::env::var("TOKEN_NAME") {
            config.token.name = name;
        }

        if let Ok(symbol) = std::env::var("TOKEN_SYMBOL") {
            config.token.symbol = symbol;
        }

        if let Ok(decimals) = std::env::var("TOKEN_DECIMALS") {
            config.token.decimals = decimals
                .parse()
                .map_err(|e| ConfigError::Parse(format!("TOKEN_DECIMALS: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.token.decimals > MAX_DECIMALS {
            return Err(ConfigError::Parse(format!(
                "decimals must be at most {}, got {}",
                MAX_DECIMALS, self.token.decimals
            )));
        }
        Ok(())
    }
}
