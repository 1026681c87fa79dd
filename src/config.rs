//! Process configuration loaded from environment variables.
//!
//! Configuration is read once at startup via [`Config::from_env`] and handed
//! to the components that need it: the database settings feed the record
//! repository pool and the advisor settings feed the generative backend
//! adapter. The [`Vocabulary`] lists are externally supplied selection data
//! for the presentation tier; the core never enforces membership against
//! them.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Default connection pool size when `BITACORA_DB_POOL_SIZE` is unset.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Default generative backend base URL when `GEMINI_BASE_URL` is unset.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default generative model when `GEMINI_MODEL` is unset.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default advisor request timeout in seconds when
/// `BITACORA_ADVISOR_TIMEOUT_SECS` is unset.
pub const DEFAULT_ADVISOR_TIMEOUT_SECS: u64 = 30;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVariable(&'static str),

    /// An environment variable holds a value that cannot be parsed.
    #[error("invalid value for {variable}: {value}")]
    InvalidValue {
        /// Name of the offending environment variable.
        variable: &'static str,
        /// The value that failed to parse.
        value: String,
    },
}

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Record store connection settings.
    pub database: DatabaseConfig,
    /// Generative backend settings for the task advisor.
    pub advisor: AdvisorConfig,
}

impl Config {
    /// Reads the full configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            advisor: AdvisorConfig::from_env()?,
        })
    }
}

/// Record store connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: String,
    /// Maximum number of pooled connections.
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Reads database settings from `DATABASE_URL` and
    /// `BITACORA_DB_POOL_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when `DATABASE_URL` is unset
    /// and [`ConfigError::InvalidValue`] when the pool size does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = required_var("DATABASE_URL")?;
        let pool_size = optional_var("BITACORA_DB_POOL_SIZE")
            .map(|value| parse_var("BITACORA_DB_POOL_SIZE", &value))
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        Ok(Self { url, pool_size })
    }
}

/// Generative backend settings for the task advisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// API key sent with every backend request.
    pub api_key: String,
    /// Base URL of the generative backend.
    pub base_url: String,
    /// Model identifier appended to the request path.
    pub model: String,
    /// Request timeout imposed on every backend call.
    pub timeout: Duration,
}

impl AdvisorConfig {
    /// Reads advisor settings from `GEMINI_API_KEY`, `GEMINI_BASE_URL`,
    /// `GEMINI_MODEL`, and `BITACORA_ADVISOR_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVariable`] when `GEMINI_API_KEY` is
    /// unset and [`ConfigError::InvalidValue`] when the timeout does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = required_var("GEMINI_API_KEY")?;
        let base_url =
            optional_var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_owned());
        let model =
            optional_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_owned());
        let timeout_secs = optional_var("BITACORA_ADVISOR_TIMEOUT_SECS")
            .map(|value| parse_var("BITACORA_ADVISOR_TIMEOUT_SECS", &value))
            .transpose()?
            .unwrap_or(DEFAULT_ADVISOR_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Selection lists offered by the presentation tier.
///
/// These are configuration data, not constraints: the record domain accepts
/// any non-empty string for equipment, user, and technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    equipment: Vec<String>,
    users: Vec<String>,
    technicians: Vec<String>,
}

impl Vocabulary {
    /// Creates a vocabulary from externally supplied selection lists.
    #[must_use]
    pub const fn new(
        equipment: Vec<String>,
        users: Vec<String>,
        technicians: Vec<String>,
    ) -> Self {
        Self {
            equipment,
            users,
            technicians,
        }
    }

    /// Returns the equipment-kind selection list.
    #[must_use]
    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Returns the user selection list.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Returns the technician selection list.
    #[must_use]
    pub fn technicians(&self) -> &[String] {
        &self.technicians
    }
}

impl Default for Vocabulary {
    /// Returns the stock selection lists shipped with the application.
    fn default() -> Self {
        Self::new(
            owned_list(&[
                "Laptop",
                "Desktop",
                "Printer",
                "Server",
                "Network Switch",
                "Mobile Phone",
            ]),
            owned_list(&["Alice", "Bob", "Charlie", "Diana", "Eve"]),
            owned_list(&["Frank", "Grace", "Heidi", "Ivan"]),
        )
    }
}

fn owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingVariable(name))
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        variable: name,
        value: value.to_owned(),
    })
}
