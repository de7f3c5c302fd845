//! The leveled logger
//!
//! A `Logger` owns a context label and exactly one sink, chosen when it is
//! built. Every message goes through [`Logger::log`]: filter against the
//! configured minimum rank, stamp with local time, write one line.
//!
//! ```no_run
//! use rlog_core::logging::{Log, Logger};
//!
//! let mut logger = Logger::with_context("worker");
//! logger.info("started");
//! // 10-18-2026 09:15:02 INFO: worker started
//! ```

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use super::console::ConsoleSink;
use super::error::LoggerResult;
use super::file::FileSink;
use super::timestamp;
use super::traits::Log;
use crate::config::{ConfigProvider, ProcessConfig, SharedConfig, DEFAULT_LOG_FILE};
use crate::types::{OutputMode, Severity};

const INIT_MESSAGE: &str = "initializing the logging process";
const DESTROY_MESSAGE: &str = "destroying the logging process";

enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

/// Pick the file a File-mode logger opens
///
/// Without `override_default` the configured default wins and `path` is
/// ignored; with it, `path` is used verbatim.
pub fn resolve_file_path(config: &dyn ConfigProvider, path: &str, override_default: bool) -> String {
    if override_default {
        path.to_string()
    } else {
        config
            .log_file_path()
            .unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }
}

/// Build one output line (without terminator)
pub fn format_line(timestamp: &str, level: Severity, context: &str, message: &str) -> String {
    format!("{} {}: {}{}", timestamp, level.name(), context, message)
}

/// Single-owner leveled logger
///
/// Not synchronized; wrap it in a [`SyncLogger`](super::SyncLogger) to
/// share it across threads.
pub struct Logger {
    context: String,
    sink: Sink,
    config: SharedConfig,
    closed: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Console logger with an empty context
    pub fn new() -> Self {
        Self::from_parts(String::new(), Sink::Console(ConsoleSink::new()), ProcessConfig::global())
    }

    /// Console logger with a context label
    ///
    /// The label is stored with a trailing space, even when empty.
    pub fn with_context(context: impl Into<String>) -> Self {
        Self::from_parts(
            stored_context(context.into()),
            Sink::Console(ConsoleSink::new()),
            ProcessConfig::global(),
        )
    }

    /// File logger
    ///
    /// Opens (and truncates) either the process default file or, with
    /// `override_default`, `path`. Fails if the file cannot be opened.
    pub fn with_file(
        context: impl Into<String>,
        path: impl Into<String>,
        override_default: bool,
    ) -> LoggerResult<Self> {
        Self::builder()
            .context(context)
            .file(path, override_default)
            .build()
    }

    /// Start building a logger with explicit settings
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(context: String, sink: Sink, config: SharedConfig) -> Self {
        let mut logger = Self {
            context,
            sink,
            config,
            closed: false,
        };
        logger.log(Severity::Info, INIT_MESSAGE);
        logger
    }

    /// Stored context, including its trailing separator
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn output_mode(&self) -> OutputMode {
        match self.sink {
            Sink::Console(_) => OutputMode::Console,
            Sink::File(_) => OutputMode::File,
        }
    }

    /// Path of the file sink, if any
    pub fn file_path(&self) -> Option<&str> {
        match &self.sink {
            Sink::File(file) => Some(file.path()),
            Sink::Console(_) => None,
        }
    }

    /// Whether the logger still accepts output
    ///
    /// Console loggers report `true` until closed.
    pub fn is_open(&self) -> bool {
        match &self.sink {
            Sink::File(file) => file.is_open(),
            Sink::Console(_) => !self.closed,
        }
    }

    /// Tear down: log the shutdown line, then release the file
    ///
    /// Only the first call has any effect. Dropping the logger calls this.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.log(Severity::Info, DESTROY_MESSAGE);
        self.closed = true;
        if let Sink::File(file) = &mut self.sink {
            file.close();
        }
    }
}

impl Log for Logger {
    fn log(&mut self, level: Severity, message: &str) {
        if !level.is_enabled(self.config.minimum_log_level()) {
            return;
        }

        let line = format_line(&timestamp::now(), level, &self.context, message);
        match &mut self.sink {
            Sink::Console(console) => console.write_line(&line),
            Sink::File(file) => file.write_line(&line),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("context", &self.context)
            .field("output_mode", &self.output_mode())
            .field("file_path", &self.file_path())
            .field("closed", &self.closed)
            .finish()
    }
}

fn stored_context(context: String) -> String {
    context + " "
}

/// Builder for loggers with an explicit config handle
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rlog_core::config::ProcessConfig;
/// use rlog_core::logging::{Logger, OutputMode};
///
/// let config = Arc::new(ProcessConfig::new(3, "unused.log"));
/// let logger = Logger::builder()
///     .context("worker")
///     .config(config)
///     .build()
///     .unwrap();
/// assert_eq!(logger.output_mode(), OutputMode::Console);
/// assert_eq!(logger.context(), "worker ");
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    context: Option<String>,
    config: Option<SharedConfig>,
    file: Option<(String, bool)>,
    console: Option<ConsoleSink>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label prefixed to every message
    ///
    /// Without this the logger has no context at all; with it (even an
    /// empty one) the label is followed by a space.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Filter against this provider instead of the process-wide one
    pub fn config(mut self, config: SharedConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Convenience for an owned provider
    pub fn config_provider(self, config: impl ConfigProvider + 'static) -> Self {
        self.config(Arc::new(config))
    }

    /// Write to a file instead of the console
    pub fn file(mut self, path: impl Into<String>, override_default: bool) -> Self {
        self.file = Some((path.into(), override_default));
        self
    }

    /// Send console output somewhere other than stdout
    pub fn console_target(mut self, target: impl Write + Send + 'static) -> Self {
        self.console = Some(ConsoleSink::with_target(target));
        self
    }

    pub fn build(self) -> LoggerResult<Logger> {
        let config = self.config.unwrap_or_else(|| ProcessConfig::global() as SharedConfig);
        let sink = match self.file {
            Some((path, override_default)) => {
                let path = resolve_file_path(config.as_ref(), &path, override_default);
                Sink::File(FileSink::open(path)?)
            }
            None => Sink::Console(self.console.unwrap_or_default()),
        };

        let context = self.context.map(stored_context).unwrap_or_default();
        Ok(Logger::from_parts(context, sink, config))
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("context", &self.context)
            .field("file", &self.file)
            .field("has_config", &self.config.is_some())
            .finish()
    }
}
