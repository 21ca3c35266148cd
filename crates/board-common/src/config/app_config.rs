//! Application configuration structs
//!
//! Loads configuration from environment variables, with an optional `.env` file.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

use tracing::Level;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub logging: LoggingConfig,
    pub feed: FeedConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(other.to_string()),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is unset
    pub level: Level,
    pub json: bool,
}

/// Activity feed assembly settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    /// Page cap for one feed request
    pub max_entries: usize,
    /// Drop rows that fail to map instead of failing the request
    pub skip_malformed: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            max_entries: default_feed_max_entries(),
            skip_malformed: true,
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "board-feed".to_string()
}

fn default_feed_max_entries() -> usize {
    200
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value that does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: Environment = parse_var(&lookup, "APP_ENV")?.unwrap_or_default();
        let default_level = if environment.is_development() {
            Level::DEBUG
        } else {
            Level::INFO
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: environment,
            },
            logging: LoggingConfig {
                level: parse_var(&lookup, "LOG_LEVEL")?.unwrap_or(default_level),
                json: parse_var(&lookup, "LOG_JSON")?.unwrap_or(environment.is_production()),
            },
            feed: FeedConfig {
                max_entries: parse_var(&lookup, "FEED_MAX_ENTRIES")?
                    .unwrap_or_else(default_feed_max_entries),
                skip_malformed: parse_var(&lookup, "FEED_SKIP_MALFORMED")?.unwrap_or(true),
            },
        })
    }
}

/// Parse a variable if set; a set but unparsable value is an error
fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw.clone()))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
