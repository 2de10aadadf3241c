use thiserror::Error;

/// Errors for domain values that fail to parse or validate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Mood score must be between 1 and 10, got {0}")]
    InvalidMood(i64),

    #[error("Unknown urgency level: {0}")]
    UnknownUrgency(String),

    #[error("Unknown support category: {0}")]
    UnknownCategory(String),
}
