//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// File name used when `CONTACT_BOOK_PATH` is not set.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact book assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is saved (default: `addressbook.json`)
    pub book_path: PathBuf,

    /// Lookahead of the `birthdays` command in days (default: 7)
    pub birthday_window_days: u32,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: `addressbook.json`)
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday lookahead, 1-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which is the conversation channel
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
