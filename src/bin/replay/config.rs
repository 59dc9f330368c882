//! Configuration for the replay tool.
//!
//! Configuration comes from two sources:
//! - Environment variables (via .env file or shell): chain and contract
//! - CLI arguments: input file and report options

use std::path::PathBuf;

use alloy::primitives::Address;
use clap::Parser;

/// Environment configuration (chain and contract details).
#[derive(Debug, serde::Deserialize)]
pub struct EnvConfig {
    /// Chain ID (e.g., 56 for BNB Smart Chain)
    pub chain_id: u64,

    /// Trading contract address
    pub trading_address: String,
}

impl EnvConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Parse the trading contract address.
    pub fn trading_address(&self) -> Result<Address, ConfigError> {
        self.trading_address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(self.trading_address.clone()))
    }
}

/// CLI arguments of the replay run.
#[derive(Debug, Parser)]
#[command(name = "replay")]
#[command(about = "Replays trading contract logs and prints per-trader stats")]
pub struct CliConfig {
    /// Path to a JSON array of logs, as returned by `eth_getLogs`
    #[arg(long)]
    pub logs: PathBuf,

    /// Report stats of this trader only
    #[arg(long)]
    pub trader: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliConfig {
    /// Parse the trader filter, if any.
    pub fn trader(&self) -> Result<Option<Address>, ConfigError> {
        self.trader
            .as_deref()
            .map(|t| t.parse().map_err(|_| ConfigError::InvalidAddress(t.to_string())))
            .transpose()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn test_cli_trader_filter() {
        let cli = CliConfig::parse_from([
            "replay",
            "--logs",
            "logs.json",
            "--trader",
            "0x00000000000000000000000000000000000000aa",
        ]);
        assert_eq!(cli.logs, PathBuf::from("logs.json"));
        assert!(!cli.json);
        assert_eq!(
            cli.trader().unwrap(),
            Some(address!("0x00000000000000000000000000000000000000aa"))
        );
    }

    #[test]
    fn test_cli_without_trader() {
        let cli = CliConfig::parse_from(["replay", "--logs", "logs.json", "--json"]);
        assert!(cli.json);
        assert_eq!(cli.trader().unwrap(), None);
    }

    #[test]
    fn test_invalid_trader() {
        let cli = CliConfig::parse_from(["replay", "--logs", "logs.json", "--trader", "0x12"]);
        assert!(matches!(
            cli.trader(),
            Err(ConfigError::InvalidAddress(ref a)) if a == "0x12"
        ));
    }

    #[test]
    fn test_invalid_trading_address() {
        let env = EnvConfig {
            chain_id: 56,
            trading_address: "not an address".to_string(),
        };
        assert!(matches!(
            env.trading_address(),
            Err(ConfigError::InvalidAddress(_))
        ));
    }
}
