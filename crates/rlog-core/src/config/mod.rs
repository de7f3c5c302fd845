//! Configuration provider abstractions
//!
//! Supports multiple configuration sources:
//! - `EnvConfigProvider`: `RLOG_MINIMUM_LOG_LEVEL` / `RLOG_LOG_FILE`
//! - `ProcessConfig`: Immutable snapshot, process-wide via `ProcessConfig::global()`
//! - `MemoryConfigProvider`: In-memory for testing

mod traits;
mod env;
mod process;
mod memory;

pub use traits::{
    ConfigProvider, ConfigError, ConfigResult, SharedConfig,
    parse_minimum_level, DEFAULT_LOG_FILE, DEFAULT_MINIMUM_LOG_LEVEL,
};
pub use env::{EnvConfigProvider, MINIMUM_LOG_LEVEL_KEY, LOG_FILE_KEY};
pub use process::ProcessConfig;
pub use memory::MemoryConfigProvider;
