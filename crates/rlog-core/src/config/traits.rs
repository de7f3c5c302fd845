//! Configuration provider trait

use std::sync::Arc;

/// Minimum rank used when nothing (or garbage) is configured
pub const DEFAULT_MINIMUM_LOG_LEVEL: i64 = 0;

/// Log file used when no path is configured
pub const DEFAULT_LOG_FILE: &str = "log.log";

/// Source of the two logger settings
///
/// Implementations:
/// - `EnvConfigProvider`: Live environment lookup
/// - `ProcessConfig`: Immutable snapshot, usually the process-wide one
/// - `MemoryConfigProvider`: In-memory for testing and embedding hosts
pub trait ConfigProvider: Send + Sync {
    /// Minimum severity rank to emit
    ///
    /// Never fails. Missing or unparsable values read as
    /// [`DEFAULT_MINIMUM_LOG_LEVEL`].
    fn minimum_log_level(&self) -> i64;

    /// Default log file path
    ///
    /// Missing values fall back to [`DEFAULT_LOG_FILE`]. An error is only
    /// returned when a value is present but unreadable.
    fn log_file_path(&self) -> ConfigResult<String>;
}

/// Handle to a provider shared by any number of loggers
pub type SharedConfig = Arc<dyn ConfigProvider>;

/// Errors that can occur while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Value of {key} is not valid unicode")]
    NotUnicode { key: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Interpret a raw minimum-level setting
///
/// Accepts an integer rank or a severity name. Anything else is 0.
pub fn parse_minimum_level(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(rank) = trimmed.parse::<i64>() {
        return rank;
    }
    trimmed
        .parse::<crate::types::Severity>()
        .map(|level| level.rank())
        .unwrap_or(DEFAULT_MINIMUM_LOG_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimum_level() {
        assert_eq!(parse_minimum_level("2"), 2);
        assert_eq!(parse_minimum_level(" 4\n"), 4);
        assert_eq!(parse_minimum_level("-1"), -1);
        assert_eq!(parse_minimum_level("error"), 3);
        assert_eq!(parse_minimum_level("WARN"), 2);
        assert_eq!(parse_minimum_level(""), 0);
        assert_eq!(parse_minimum_level("loud"), 0);
        assert_eq!(parse_minimum_level("2.5"), 0);
    }
}
