//! Severity levels

use std::fmt;
use std::str::FromStr;

/// Rendered severity names, indexed by rank
const LEVEL_NAMES: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

/// Ordered log severity
///
/// Filtering always compares [`Severity::rank`], never the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    /// All severities, lowest first
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Numeric rank (DEBUG = 0 .. FATAL = 4)
    pub fn rank(self) -> i64 {
        self as i64
    }

    /// Uppercase name used in emitted lines
    pub fn name(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// Look up a severity by its rank
    pub fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Error),
            4 => Some(Severity::Fatal),
            _ => None,
        }
    }

    /// Whether a message at this severity passes a minimum rank threshold
    pub fn is_enabled(self, minimum: i64) -> bool {
        self.rank() >= minimum
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is neither a severity name nor a rank
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<i64>() {
            return Severity::from_rank(rank).ok_or_else(|| ParseSeverityError(s.to_string()));
        }
        match trimmed.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Info > Severity::Debug);
        assert!(Severity::Warn > Severity::Info);
        assert!(Severity::Error > Severity::Warn);
        assert!(Severity::Fatal > Severity::Error);
    }

    #[test]
    fn test_names_follow_rank() {
        for (rank, level) in Severity::ALL.iter().enumerate() {
            assert_eq!(level.rank(), rank as i64);
            assert_eq!(level.name(), LEVEL_NAMES[rank]);
            assert_eq!(Severity::from_rank(rank as i64), Some(*level));
        }
        assert_eq!(Severity::from_rank(5), None);
        assert_eq!(Severity::from_rank(-1), None);
    }

    #[test]
    fn test_is_enabled() {
        assert!(Severity::Debug.is_enabled(0));
        assert!(!Severity::Info.is_enabled(2));
        assert!(Severity::Warn.is_enabled(2));
        assert!(Severity::Fatal.is_enabled(-3));
        assert!(!Severity::Fatal.is_enabled(5));
    }

    #[test]
    fn test_parse() {
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("FATAL".parse::<Severity>(), Ok(Severity::Fatal));
        assert_eq!(" 3 ".parse::<Severity>(), Ok(Severity::Error));
        assert!("7".parse::<Severity>().is_err());
        assert!("verbose".parse::<Severity>().is_err());
        assert!("warning".parse::<Severity>().is_err());
    }
}
