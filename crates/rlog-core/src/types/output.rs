//! Output routing

/// Where a logger writes its lines
///
/// Chosen when the logger is built and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Standard output (or a substitute writer)
    #[default]
    Console,
    /// A single file opened at construction
    File,
}
