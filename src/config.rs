use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::models::AccountType;
use crate::types::{AccountNumber, Monetary};

/// Command line configuration.
#[derive(Debug, Parser)]
#[command(
    name = "account-ledger",
    version,
    about = "Console ledger for saving and current accounts backed by a flat record file"
)]
pub struct Config {
    /// File holding one `number|type|owner|balance` record per account
    #[arg(long, env = "ACCOUNT_LEDGER_DATA_FILE", default_value = "accounts.txt")]
    pub data_file: PathBuf,

    /// Log level written to stderr: error, warn, info, debug or trace
    #[arg(long, env = "ACCOUNT_LEDGER_LOG", default_value = "warn", value_parser = parse_log_level)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Option<Command>
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default)
    Menu,
    /// Open a new account
    Open {
        /// Account type: S (saving) or C (current)
        #[arg(short = 't', long = "type")]
        account_type: AccountType,
        /// Owner name
        #[arg(short, long)]
        owner: String,
        /// Initial deposit
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        deposit: Monetary
    },
    /// Deposit into an account
    Deposit {
        account_number: AccountNumber,
        #[arg(allow_negative_numbers = true)]
        amount: Monetary
    },
    /// Withdraw from an account
    Withdraw {
        account_number: AccountNumber,
        #[arg(allow_negative_numbers = true)]
        amount: Monetary
    },
    /// Show the details of one account
    Show {
        account_number: AccountNumber
    },
    /// List every account in creation order
    List
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(format!("Invalid log level '{level}', expected one of: error, warn, info, debug, trace, off"))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_log_level, Command, Config};
    use anyhow::Result;
    use clap::Parser;
    use tracing::level_filters::LevelFilter;

    use crate::models::AccountType;

    #[test]
    fn test_parse_log_level_accepts_known_levels_case_insensitively() {
        assert_eq!(parse_log_level("TRACE"), Ok(LevelFilter::TRACE));
        assert_eq!(parse_log_level("warn"), Ok(LevelFilter::WARN));
        assert!(parse_log_level("loud").is_err());
    }

    #[test]
    fn test_config_parses_open_subcommand() -> Result<()> {
        let config = Config::try_parse_from([
            "account-ledger", "--data-file", "ledger.txt", "--log-level", "debug",
            "open", "--type", "s", "--owner", "Alice", "--deposit", "100"
        ])?;

        assert_eq!(config.data_file.to_str(), Some("ledger.txt"));
        assert_eq!(config.log_level, LevelFilter::DEBUG);

        let Some(Command::Open { account_type, owner, deposit }) = config.command else {
            anyhow::bail!("expected the open subcommand");
        };

        assert_eq!(account_type, AccountType::Saving);
        assert_eq!(owner, "Alice");
        assert_eq!(deposit.to_string(), "100.00");

        Ok(())
    }

    #[test]
    fn test_config_rejects_malformed_amounts() {
        assert!(Config::try_parse_from(["account-ledger", "deposit", "1001", "1.234"]).is_err());
        assert!(Config::try_parse_from(["account-ledger", "withdraw", "abc", "10"]).is_err());
    }
}
