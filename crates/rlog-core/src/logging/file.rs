//! File sink
//!
//! Owns the single file a File-mode logger writes to. The file is
//! truncated on open and released exactly once.

use std::fs::{File, OpenOptions};
use std::io::Write;

use super::error::{LoggerError, LoggerResult};

/// Exclusively owned log file
#[derive(Debug)]
pub struct FileSink {
    path: String,
    file: Option<File>,
}

impl FileSink {
    /// Open `path` for writing, truncating existing content
    pub fn open(path: impl Into<String>) -> LoggerResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| LoggerError::open(path.clone(), e))?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Write one line and a terminator
    ///
    /// Skipped silently once the sink is closed; write failures are dropped.
    pub fn write_line(&mut self, line: &str) {
        if let Some(ref mut file) = self.file {
            let _ = writeln!(file, "{}", line);
            let _ = file.flush();
        }
    }

    /// Flush and release the file. Later calls are no-ops.
    pub fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }
}
