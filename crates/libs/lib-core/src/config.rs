//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The configuration is loaded once by the server bootstrap and handed to the
//! router as state; handlers never read the environment themselves.
//!
//! ## Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `BIND_ADDRESS` | `127.0.0.1:3001` |
//! | `JUPITER_API_BASE` | `https://quote-api.jup.ag/v6` |
//! | `DEFAULT_SLIPPAGE_BPS` | `50` |
//! | `SOLANA_NETWORK` | `mainnet` |
//! | `ACTION_ICON_URL` | `https://static.jup.ag/jup/icon.png` |
//! | `FEE_ACCOUNT` | unset |

use lib_utils::{get_env_or, get_env_parse_or, validate_not_empty, validate_range};
use std::fmt;
use std::str::FromStr;

/// Actions protocol version advertised in the `X-Action-Version` header.
pub const ACTION_VERSION: &str = "2.1.3";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_JUPITER_API_BASE: &str = "https://quote-api.jup.ag/v6";
pub const DEFAULT_ICON_URL: &str = "https://static.jup.ag/jup/icon.png";
pub const DEFAULT_SLIPPAGE_BPS: u16 = 50;

/// Largest slippage the aggregator accepts (100%).
pub const MAX_SLIPPAGE_BPS: u16 = 10_000;

/// Solana cluster the actions are served for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Devnet,
}

impl Network {
    /// CAIP-2 chain identifier sent in the `X-Blockchain-Ids` header.
    pub fn blockchain_id(&self) -> &'static str {
        match self {
            Network::Mainnet => "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
            Network::Devnet => "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1",
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Network::Mainnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(format!("Unknown SOLANA_NETWORK: {}", other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Devnet => write!(f, "devnet"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Socket address the HTTP server binds to
    pub bind_address: String,

    /// Base URL of the Jupiter swap API (`/quote` and `/swap` are appended)
    pub jupiter_api_base: String,

    /// Slippage tolerance in basis points used when a request does not override it
    pub default_slippage_bps: u16,

    /// Cluster whose chain id is advertised to Blink clients
    pub network: Network,

    /// Icon shown when the input token has no logo
    pub fallback_icon_url: String,

    /// Optional platform fee account forwarded to the swap transaction build
    pub fee_account: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            jupiter_api_base: DEFAULT_JUPITER_API_BASE.to_string(),
            default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
            network: Network::Mainnet,
            fallback_icon_url: DEFAULT_ICON_URL.to_string(),
            fee_account: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let bind_address = get_env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);

        let jupiter_api_base = get_env_or("JUPITER_API_BASE", DEFAULT_JUPITER_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let default_slippage_bps = get_env_parse_or("DEFAULT_SLIPPAGE_BPS", DEFAULT_SLIPPAGE_BPS)
            .map_err(|e| format!("DEFAULT_SLIPPAGE_BPS must be a valid number: {}", e))?;

        let network = get_env_or("SOLANA_NETWORK", "mainnet").parse()?;

        let fallback_icon_url = get_env_or("ACTION_ICON_URL", DEFAULT_ICON_URL);

        let fee_account = std::env::var("FEE_ACCOUNT")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            bind_address,
            jupiter_api_base,
            default_slippage_bps,
            network,
            fallback_icon_url,
            fee_account,
        })
    }

    /// Validate configuration values.
    ///
    /// The fee account's address format is checked by the Solana layer when the
    /// aggregator client is built; here it only has to be non-empty.
    pub fn validate(&self) -> Result<(), String> {
        validate_not_empty(&self.bind_address, "BIND_ADDRESS")?;

        if !self.jupiter_api_base.starts_with("http://") && !self.jupiter_api_base.starts_with("https://") {
            return Err("JUPITER_API_BASE must be an http(s) URL".to_string());
        }

        validate_range(self.default_slippage_bps, 1, MAX_SLIPPAGE_BPS, "DEFAULT_SLIPPAGE_BPS")?;

        if let Some(fee_account) = &self.fee_account {
            validate_not_empty(fee_account, "FEE_ACCOUNT")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.network.blockchain_id(), "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp");
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("devnet".parse::<Network>().unwrap(), Network::Devnet);
        assert_eq!("Mainnet-Beta".parse::<Network>().unwrap(), Network::Mainnet);
        assert!("testnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            default_slippage_bps: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            jupiter_api_base: "quote-api.jup.ag".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
