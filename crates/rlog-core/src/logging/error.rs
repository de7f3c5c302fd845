//! Logger error types

use std::io;

use thiserror::Error;

/// Errors that can occur while building a logger
#[derive(Error, Debug)]
pub enum LoggerError {
    /// The file sink could not be opened
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    /// Create an open error
    pub fn open(path: impl Into<String>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Underlying IO error kind
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } => source.kind(),
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
