//! In-memory configuration provider

use parking_lot::RwLock;

use super::traits::{ConfigProvider, ConfigResult, DEFAULT_LOG_FILE, DEFAULT_MINIMUM_LOG_LEVEL};

/// In-memory configuration provider for testing
///
/// Unset values fall back to the defaults, same as an empty environment.
#[derive(Debug, Default)]
pub struct MemoryConfigProvider {
    minimum_log_level: RwLock<Option<i64>>,
    log_file_path: RwLock<Option<String>>,
}

impl MemoryConfigProvider {
    /// Create a new provider with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with both values set
    pub fn with_values(minimum_log_level: i64, log_file_path: impl Into<String>) -> Self {
        Self {
            minimum_log_level: RwLock::new(Some(minimum_log_level)),
            log_file_path: RwLock::new(Some(log_file_path.into())),
        }
    }

    pub fn set_minimum_log_level(&self, level: i64) {
        *self.minimum_log_level.write() = Some(level);
    }

    pub fn set_log_file_path(&self, path: impl Into<String>) {
        *self.log_file_path.write() = Some(path.into());
    }

    /// Forget both values
    pub fn clear(&self) {
        *self.minimum_log_level.write() = None;
        *self.log_file_path.write() = None;
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn minimum_log_level(&self) -> i64 {
        (*self.minimum_log_level.read()).unwrap_or(DEFAULT_MINIMUM_LOG_LEVEL)
    }

    fn log_file_path(&self) -> ConfigResult<String> {
        Ok(self
            .log_file_path
            .read()
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()))
    }
}
