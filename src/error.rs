use std::path::PathBuf;
use thiserror::Error;

/// Errors raised for setup problems and contract violations.
///
/// Bad content in a single input row is never reported through this type;
/// see [`crate::records::ProcessingError`] for that.
#[derive(Debug, Error)]
pub enum UserDataError {
    /// One or more scoring settings are out of range.
    #[error("invalid scoring config: {}", errors.join("; "))]
    InvalidConfig { errors: Vec<String> },

    /// The scorer was called with a negative count.
    #[error("{field} must be non-negative, got {value}")]
    NegativeInput { field: &'static str, value: i64 },

    /// The weighted sum does not fit in an i64 score.
    #[error("score for {purchases} purchases and {visits} visits is out of range")]
    ScoreOutOfRange { purchases: i64, visits: i64 },

    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("input file is empty: {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Missing required fields: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}
