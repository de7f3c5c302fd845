//! Leveled logging trait and call-site macros

use crate::types::Severity;

/// Leveled logging front end
///
/// Implementors supply [`Log::log`]; the per-severity methods are fixed
/// shorthands for it and add no behavior of their own (`fatal` does not
/// abort the process).
///
/// Implementations:
/// - `Logger`: Single-owner console or file logger
/// - `SyncLogger`: Lock-guarded handle to a `Logger`
pub trait Log {
    /// Filter, format and emit one message
    fn log(&mut self, level: Severity, message: &str);

    /// Log a fatal message
    fn fatal(&mut self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    /// Log an error message
    fn error(&mut self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Log a warning message
    fn warn(&mut self, message: &str) {
        self.log(Severity::Warn, message);
    }

    /// Log an info message
    fn info(&mut self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Log a debug message
    fn debug(&mut self, message: &str) {
        self.log(Severity::Debug, message);
    }
}

/// Log at an explicit severity with format arguments
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        {
            #[allow(unused_imports)]
            use $crate::logging::Log as _;
            $logger.log($level, &format!($($arg)*))
        }
    };
}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::types::Severity::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::types::Severity::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::types::Severity::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::types::Severity::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log_at!($logger, $crate::types::Severity::Fatal, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<(Severity, String)>,
    }

    impl Log for Recorder {
        fn log(&mut self, level: Severity, message: &str) {
            self.seen.push((level, message.to_string()));
        }
    }

    #[test]
    fn test_shorthands_map_to_fixed_levels() {
        let mut recorder = Recorder::default();
        recorder.debug("a");
        recorder.info("b");
        recorder.warn("c");
        recorder.error("d");
        recorder.fatal("e");

        let levels: Vec<Severity> = recorder.seen.iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, Severity::ALL.to_vec());
    }

    #[test]
    fn test_macros_format_arguments() {
        let mut recorder = Recorder::default();
        crate::log_info!(recorder, "loaded {} items", 3);
        crate::log_fatal!(recorder, "code {code}", code = 7);
        crate::log_at!(recorder, Severity::Warn, "plain");

        assert_eq!(
            recorder.seen,
            vec![
                (Severity::Info, "loaded 3 items".to_string()),
                (Severity::Fatal, "code 7".to_string()),
                (Severity::Warn, "plain".to_string()),
            ]
        );
    }

    #[test]
    fn test_macros_through_reference() {
        let mut recorder = Recorder::default();
        let handle = &mut recorder;
        crate::log_error!(handle, "via {}", "ref");
        crate::log_debug!(handle, "again");
        crate::log_warn!(handle, "once more");
        assert_eq!(recorder.seen.len(), 3);
    }
}
