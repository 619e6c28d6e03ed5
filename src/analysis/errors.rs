use thiserror::Error;

/// Errors that can occur when asking the analyzer for a report.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AnalyzeError {
    /// The requested target index does not point into the roster. This is
    /// a caller contract violation, never clamped or papered over.
    #[error("Target index {target} is out of range for a roster of {roster} players")]
    TargetOutOfRange { target: usize, roster: usize },
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalyzeError>;
