//! Lock-guarded logger handle
//!
//! `Logger` itself is single-owner. When several threads need to log
//! through one sink, share a `SyncLogger`: every call holds the lock for
//! the whole filter/format/write, so lines never interleave.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::logger::Logger;
use super::traits::Log;
use crate::types::Severity;

/// Cloneable, thread-safe handle to one `Logger`
#[derive(Clone)]
pub struct SyncLogger {
    inner: Arc<Mutex<Logger>>,
}

impl SyncLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    /// Log through the shared logger
    pub fn log(&self, level: Severity, message: &str) {
        self.inner.lock().log(level, message);
    }

    /// Run a closure with the logger locked
    pub fn with<R>(&self, f: impl FnOnce(&mut Logger) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Close the shared logger for every handle
    pub fn close(&self) {
        self.inner.lock().close();
    }
}

impl Log for SyncLogger {
    fn log(&mut self, level: Severity, message: &str) {
        SyncLogger::log(self, level, message);
    }
}

impl From<Logger> for SyncLogger {
    fn from(logger: Logger) -> Self {
        Self::new(logger)
    }
}

impl fmt::Debug for SyncLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncLogger")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish()
    }
}
