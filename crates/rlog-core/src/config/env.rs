//! Environment variable configuration provider

use std::env::{self, VarError};

use super::traits::{
    parse_minimum_level, ConfigError, ConfigProvider, ConfigResult, DEFAULT_LOG_FILE,
    DEFAULT_MINIMUM_LOG_LEVEL,
};

/// Environment key holding the minimum severity (rank or name)
pub const MINIMUM_LOG_LEVEL_KEY: &str = "RLOG_MINIMUM_LOG_LEVEL";

/// Environment key holding the default log file path
pub const LOG_FILE_KEY: &str = "RLOG_LOG_FILE";

/// Configuration provider that reads environment variables
///
/// Every call looks the variables up again, so values set by the host
/// process before a logger is built are picked up. The provider never
/// writes to the environment; absent values fall back to the defaults.
///
/// # Example
///
/// ```
/// use rlog_core::config::{ConfigProvider, EnvConfigProvider};
///
/// // Neither variable is set, so both settings fall back.
/// let config = EnvConfigProvider::with_keys("MYAPP_LOG_LEVEL", "MYAPP_LOG_FILE");
/// assert_eq!(config.minimum_log_level(), 0);
/// assert_eq!(config.log_file_path().unwrap(), "log.log");
/// ```
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    level_key: String,
    file_key: String,
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvConfigProvider {
    /// Create a provider for the standard `RLOG_*` keys
    pub fn new() -> Self {
        Self::with_keys(MINIMUM_LOG_LEVEL_KEY, LOG_FILE_KEY)
    }

    /// Create a provider reading custom variable names
    pub fn with_keys(level_key: impl Into<String>, file_key: impl Into<String>) -> Self {
        Self {
            level_key: level_key.into(),
            file_key: file_key.into(),
        }
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn minimum_log_level(&self) -> i64 {
        env::var(&self.level_key)
            .map(|raw| parse_minimum_level(&raw))
            .unwrap_or(DEFAULT_MINIMUM_LOG_LEVEL)
    }

    fn log_file_path(&self) -> ConfigResult<String> {
        match env::var(&self.file_key) {
            Ok(path) if !path.is_empty() => Ok(path),
            Ok(_) | Err(VarError::NotPresent) => Ok(DEFAULT_LOG_FILE.to_string()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
                key: self.file_key.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_defaults_when_unset() {
        let config = EnvConfigProvider::with_keys("RLOG_TEST_UNSET_LEVEL", "RLOG_TEST_UNSET_FILE");
        assert_eq!(config.minimum_log_level(), 0);
        assert_eq!(config.log_file_path().unwrap(), "log.log");
    }

    #[test]
    fn test_env_reads_values() {
        env::set_var("RLOG_TEST_READ_LEVEL", "3");
        env::set_var("RLOG_TEST_READ_FILE", "/tmp/rlog-test.log");

        let config = EnvConfigProvider::with_keys("RLOG_TEST_READ_LEVEL", "RLOG_TEST_READ_FILE");
        assert_eq!(config.minimum_log_level(), 3);
        assert_eq!(config.log_file_path().unwrap(), "/tmp/rlog-test.log");

        env::remove_var("RLOG_TEST_READ_LEVEL");
        env::remove_var("RLOG_TEST_READ_FILE");
    }

    #[test]
    fn test_env_garbage_level_is_zero() {
        env::set_var("RLOG_TEST_BAD_LEVEL", "chatty");

        let config = EnvConfigProvider::with_keys("RLOG_TEST_BAD_LEVEL", "RLOG_TEST_BAD_FILE");
        assert_eq!(config.minimum_log_level(), 0);

        env::remove_var("RLOG_TEST_BAD_LEVEL");
    }

    #[test]
    fn test_env_empty_file_falls_back() {
        env::set_var("RLOG_TEST_EMPTY_FILE", "");

        let config = EnvConfigProvider::with_keys("RLOG_TEST_EMPTY_LEVEL", "RLOG_TEST_EMPTY_FILE");
        assert_eq!(config.log_file_path().unwrap(), "log.log");

        env::remove_var("RLOG_TEST_EMPTY_FILE");
    }

    #[cfg(unix)]
    #[test]
    fn test_env_non_unicode_file_is_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        env::set_var("RLOG_TEST_RAW_FILE", OsStr::from_bytes(&[0x66, 0x6f, 0x80]));

        let config = EnvConfigProvider::with_keys("RLOG_TEST_RAW_LEVEL", "RLOG_TEST_RAW_FILE");
        assert!(matches!(
            config.log_file_path(),
            Err(ConfigError::NotUnicode { .. })
        ));

        env::remove_var("RLOG_TEST_RAW_FILE");
    }
}
