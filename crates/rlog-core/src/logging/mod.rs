//! Leveled logging to a console or a single file
//!
//! - `Logger`: the single-owner logger, built with `Logger::new`,
//!   `Logger::with_context`, `Logger::with_file` or `Logger::builder`
//! - `Log`: severity shorthands shared by `Logger` and `SyncLogger`
//! - `SyncLogger`: lock-guarded handle for multi-threaded hosts

mod traits;
mod console;
mod error;
mod file;
mod logger;
mod sync;
pub mod timestamp;

pub use traits::Log;
pub use console::ConsoleSink;
pub use error::{LoggerError, LoggerResult};
pub use file::FileSink;
pub use logger::{Logger, LoggerBuilder, format_line, resolve_file_path};
pub use sync::SyncLogger;
pub use crate::types::{OutputMode, Severity};
