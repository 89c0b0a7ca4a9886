//! Configuration module for the poll and form stores.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

use crate::errors::AppError;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Initial value of the compact view toggle
    pub compact_view: bool,
    /// Prefix for deterministic identifiers; random UUIDs when unset
    pub id_prefix: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            compact_view: false,
            id_prefix: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("POLLFORMS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("POLLFORMS_LOG_FORMAT") {
            Some(raw) => LogFormat::from_str(&raw).ok_or_else(|| {
                AppError::Config(format!("Invalid POLLFORMS_LOG_FORMAT: {}", raw))
            })?,
            None => LogFormat::default(),
        };

        let compact_view = match lookup("POLLFORMS_COMPACT_VIEW") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("Invalid POLLFORMS_COMPACT_VIEW: {}", raw))
            })?,
            None => false,
        };

        let id_prefix = lookup("POLLFORMS_ID_PREFIX").filter(|p| !p.trim().is_empty());

        Ok(Self {
            log_level,
            log_format,
            compact_view,
            id_prefix,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
