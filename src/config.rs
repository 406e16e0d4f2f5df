//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the bot connects.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CREDENTIALS_PATH, DEFAULT_RUST_LOG, DEFAULT_SHEETS_RETRY_ATTEMPTS,
    DEFAULT_SHEETS_RETRY_BASE_DELAY_MS, DEFAULT_SHEET_NAME,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub discord: DiscordConfig,
    pub sheets: SheetsConfig,
    pub logging: LoggingConfig,
}

/// Discord connection configuration
#[derive(Clone)]
pub struct DiscordConfig {
    pub token: String,
    /// Register commands to this guild only (instant propagation) instead of globally
    pub guild_id: Option<u64>,
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// Spreadsheet mirror configuration
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// Target spreadsheet; the mirror is disabled when unset
    pub spreadsheet_id: Option<String>,
    pub sheet_name: String,
    pub credentials_path: PathBuf,
    pub retry_attempts: u32,
    pub retry_base_delay: Duration,
}

/// Log output configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            discord: DiscordConfig::from_env()?,
            sheets: SheetsConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }
}

impl DiscordConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            token: env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::Missing("DISCORD_TOKEN".to_string()))?,
            guild_id: optional_var("DISCORD_GUILD_ID")
                .map(|raw| {
                    raw.parse()
                        .map_err(|_| ConfigError::InvalidValue("DISCORD_GUILD_ID".to_string()))
                })
                .transpose()?,
        })
    }
}

impl SheetsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let retry_attempts: u32 = env::var("SHEETS_RETRY_ATTEMPTS")
            .unwrap_or_else(|_| DEFAULT_SHEETS_RETRY_ATTEMPTS.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SHEETS_RETRY_ATTEMPTS".to_string()))?;

        if retry_attempts == 0 {
            return Err(ConfigError::InvalidValue("SHEETS_RETRY_ATTEMPTS".to_string()));
        }

        Ok(Self {
            spreadsheet_id: optional_var("SHEETS_SPREADSHEET_ID"),
            sheet_name: env::var("SHEETS_SHEET_NAME")
                .unwrap_or_else(|_| DEFAULT_SHEET_NAME.to_string()),
            credentials_path: PathBuf::from(
                env::var("GOOGLE_CREDENTIALS_PATH")
                    .unwrap_or_else(|_| DEFAULT_CREDENTIALS_PATH.to_string()),
            ),
            retry_attempts,
            retry_base_delay: Duration::from_millis(
                env::var("SHEETS_RETRY_BASE_DELAY_MS")
                    .unwrap_or_else(|_| DEFAULT_SHEETS_RETRY_BASE_DELAY_MS.to_string())
                    .parse()
                    .map_err(|_| {
                        ConfigError::InvalidValue("SHEETS_RETRY_BASE_DELAY_MS".to_string())
                    })?,
            ),
        })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
            format: LogFormat::parse(
                &env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            )?,
        })
    }
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

/// Read a variable, treating empty values as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON ").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty").unwrap(), LogFormat::Pretty);
        assert!(LogFormat::parse("xml").is_err());
    }

    #[test]
    fn test_discord_token_is_redacted() {
        let discord = DiscordConfig {
            token: "super-secret".to_string(),
            guild_id: Some(42),
        };
        let printed = format!("{:?}", discord);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("42"));
    }

    #[test]
    fn test_default_values() {
        let sheets = SheetsConfig {
            spreadsheet_id: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            retry_attempts: DEFAULT_SHEETS_RETRY_ATTEMPTS,
            retry_base_delay: Duration::from_millis(DEFAULT_SHEETS_RETRY_BASE_DELAY_MS),
        };
        assert_eq!(sheets.sheet_name, "Sheet1");
        assert_eq!(sheets.retry_attempts, 3);
        assert_eq!(sheets.retry_base_delay, Duration::from_millis(500));
    }
}
