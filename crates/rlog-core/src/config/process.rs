//! Process-wide configuration snapshot

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::env::EnvConfigProvider;
use super::traits::{ConfigProvider, ConfigResult, DEFAULT_LOG_FILE, DEFAULT_MINIMUM_LOG_LEVEL};

/// Snapshot shared by every logger that was not given its own provider
static PROCESS_CONFIG: OnceCell<Arc<ProcessConfig>> = OnceCell::new();

/// Immutable logger settings
///
/// Built once by the process owner (or lazily from the environment on
/// first use) and handed to loggers by reference. Nothing in this crate
/// mutates a `ProcessConfig` after construction.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rlog_core::config::{ConfigProvider, ProcessConfig};
///
/// let config = Arc::new(ProcessConfig::new(2, "service.log"));
/// assert_eq!(config.minimum_log_level(), 2);
/// assert_eq!(config.log_file_path().unwrap(), "service.log");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    minimum_log_level: i64,
    log_file_path: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            minimum_log_level: DEFAULT_MINIMUM_LOG_LEVEL,
            log_file_path: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl ProcessConfig {
    pub fn new(minimum_log_level: i64, log_file_path: impl Into<String>) -> Self {
        Self {
            minimum_log_level,
            log_file_path: log_file_path.into(),
        }
    }

    /// Snapshot the `RLOG_*` environment variables
    pub fn from_env() -> Self {
        Self::from_provider(&EnvConfigProvider::new())
    }

    /// Snapshot any provider
    ///
    /// An unreadable file path falls back to the default.
    pub fn from_provider(provider: &dyn ConfigProvider) -> Self {
        Self {
            minimum_log_level: provider.minimum_log_level(),
            log_file_path: provider
                .log_file_path()
                .unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string()),
        }
    }

    /// Set the minimum level
    pub fn with_minimum_log_level(mut self, level: i64) -> Self {
        self.minimum_log_level = level;
        self
    }

    /// Set the default log file path
    pub fn with_log_file_path(mut self, path: impl Into<String>) -> Self {
        self.log_file_path = path.into();
        self
    }

    /// The process-wide snapshot
    ///
    /// Initialized from the environment on first call unless the process
    /// owner installed one earlier. Every later call returns the same
    /// instance.
    pub fn global() -> Arc<ProcessConfig> {
        PROCESS_CONFIG
            .get_or_init(|| Arc::new(ProcessConfig::from_env()))
            .clone()
    }

    /// Pin the process-wide snapshot before any logger is built
    ///
    /// Returns the snapshot that was already in place if one exists; it is
    /// left untouched.
    pub fn install(config: ProcessConfig) -> Result<(), Arc<ProcessConfig>> {
        let mut fresh = Some(config);
        let current = PROCESS_CONFIG.get_or_init(|| {
            Arc::new(fresh.take().unwrap_or_default())
        });
        if fresh.is_none() {
            Ok(())
        } else {
            Err(current.clone())
        }
    }

    /// Whether the process-wide snapshot exists yet
    pub fn is_initialized() -> bool {
        PROCESS_CONFIG.get().is_some()
    }
}

impl ConfigProvider for ProcessConfig {
    fn minimum_log_level(&self) -> i64 {
        self.minimum_log_level
    }

    fn log_file_path(&self) -> ConfigResult<String> {
        Ok(self.log_file_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigProvider;

    #[test]
    fn test_default_values() {
        let config = ProcessConfig::default();
        assert_eq!(config.minimum_log_level(), 0);
        assert_eq!(config.log_file_path().unwrap(), "log.log");
    }

    #[test]
    fn test_builders() {
        let config = ProcessConfig::default()
            .with_minimum_log_level(3)
            .with_log_file_path("out.log");
        assert_eq!(config, ProcessConfig::new(3, "out.log"));
    }

    #[test]
    fn test_from_provider() {
        let memory = MemoryConfigProvider::new();
        memory.set_minimum_log_level(4);
        memory.set_log_file_path("memory.log");

        let config = ProcessConfig::from_provider(&memory);
        assert_eq!(config, ProcessConfig::new(4, "memory.log"));

        // Later changes to the source do not leak into the snapshot
        memory.set_minimum_log_level(1);
        assert_eq!(config.minimum_log_level(), 4);
    }

    #[test]
    fn test_global_is_initialized_once() {
        let first = ProcessConfig::global();
        let second = ProcessConfig::global();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(ProcessConfig::is_initialized());

        let existing = ProcessConfig::install(ProcessConfig::new(4, "late.log")).unwrap_err();
        assert!(Arc::ptr_eq(&existing, &first));
        assert_eq!(*ProcessConfig::global(), *first);
    }
}
