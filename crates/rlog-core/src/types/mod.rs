//! Core types shared by the config and logging layers

mod level;
mod output;

pub use level::{Severity, ParseSeverityError};
pub use output::OutputMode;
