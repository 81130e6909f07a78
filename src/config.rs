//! Parser limits and logging settings.
//!
//! Both can be overridden from the environment, and the command-line tool
//! applies its flags on top of that.
//!
//! # Environment Variables
//!
//! - `DERIVE_ATTRS_MAX_DEPTH`: how deeply maps may nest
//! - `DERIVE_ATTRS_LOG_LEVEL`: trace, debug, info, warn or error

use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const MAX_DEPTH_VAR: &str = "DERIVE_ATTRS_MAX_DEPTH";
pub const LOG_LEVEL_VAR: &str = "DERIVE_ATTRS_LOG_LEVEL";

/// Default limit on map nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Log level enumeration matching tracing crate levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::Invalid(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Reads `DERIVE_ATTRS_LOG_LEVEL`, falling back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(LOG_LEVEL_VAR) {
            Ok(val) => val.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Limits applied while parsing one annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of maps that may be open at once.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    /// Reads `DERIVE_ATTRS_MAX_DEPTH`, falling back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_depth = match env::var(MAX_DEPTH_VAR) {
            Ok(val) => parse_depth(&val)?,
            Err(_) => DEFAULT_MAX_DEPTH,
        };

        Ok(Self { max_depth })
    }

    /// CLI values take precedence over the environment.
    pub fn apply_overrides(mut self, max_depth: Option<usize>) -> Self {
        if let Some(depth) = max_depth {
            self.max_depth = depth;
        }
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

fn parse_depth(val: &str) -> Result<usize, ConfigError> {
    val.trim().parse().map_err(|_| {
        ConfigError::Invalid(format!(
            "invalid max depth '{val}', expected a non-negative integer"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn log_level_as_filter_str() {
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert_eq!(LogLevel::default().as_filter_str(), "warn");
    }

    #[test]
    fn parser_config_defaults() {
        assert_eq!(ParserConfig::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn parse_depth_accepts_integers() {
        assert_eq!(parse_depth(" 8 "), Ok(8));
        assert!(parse_depth("-1").is_err());
        assert!(parse_depth("deep").is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let config = ParserConfig::default().apply_overrides(Some(3));
        assert_eq!(config.max_depth, 3);

        let config = ParserConfig::default().with_max_depth(5).apply_overrides(None);
        assert_eq!(config.max_depth, 5);
    }
}
