//! rlog Core
//!
//! A minimal leveled logger. Each `Logger` carries a context label and
//! writes either to stdout or to one file it opened itself. Messages below
//! the configured minimum severity are dropped before they are formatted.
//!
//! ```rust,no_run
//! use rlog_core::{log_warn, Log, Logger};
//!
//! let mut logger = Logger::with_context("buffer.rs");
//! logger.info("Aloha!");
//! log_warn!(logger, "snoozing for {}s", 2);
//!
//! // File output, path taken from RLOG_LOG_FILE (default "log.log")
//! let mut file_logger = Logger::with_file("buffer.rs", "ignored.log", false)?;
//! file_logger.error("critical computation time lost");
//! # Ok::<(), rlog_core::LoggerError>(())
//! ```
//!
//! ## Configuration
//!
//! Two settings, read from the environment the first time any logger is
//! built (see `ProcessConfig::global`):
//! - `RLOG_MINIMUM_LOG_LEVEL`: rank `0..=4` or a severity name, default `0`
//! - `RLOG_LOG_FILE`: default log file, default `log.log`
//!
//! Hosts that want explicit control build a `ProcessConfig` themselves and
//! either `ProcessConfig::install` it or pass it to `Logger::builder`.

pub mod types;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use types::{Severity, OutputMode, ParseSeverityError};

pub use config::{
    ConfigProvider, ConfigError, ConfigResult, SharedConfig,
    EnvConfigProvider, MemoryConfigProvider, ProcessConfig,
};

pub use logging::{Log, Logger, LoggerBuilder, LoggerError, LoggerResult, SyncLogger};
