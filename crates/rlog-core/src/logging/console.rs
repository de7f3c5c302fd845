//! Console sink

use std::fmt;
use std::io::{self, Write};

/// Writes lines to stdout, or to a substitute writer
pub struct ConsoleSink {
    target: Box<dyn Write + Send>,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Create a sink on standard output
    pub fn new() -> Self {
        Self {
            target: Box::new(io::stdout()),
        }
    }

    /// Create a sink on a custom writer
    pub fn with_target(target: impl Write + Send + 'static) -> Self {
        Self {
            target: Box::new(target),
        }
    }

    /// Write one line and a terminator. Failures are dropped.
    pub fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.target, "{}", line);
        let _ = self.target.flush();
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink").finish_non_exhaustive()
    }
}
