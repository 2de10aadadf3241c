use mindconnect_store::StoreError;
use mindconnect_views::FormId;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Failures reported by a submission backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Submission timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),
}

impl BackendError {
    pub fn unavailable<T: fmt::Display>(msg: T) -> Self {
        BackendError::Unavailable(msg.to_string())
    }

    pub fn rejected<T: fmt::Display>(msg: T) -> Self {
        BackendError::Rejected(msg.to_string())
    }

    /// Timeouts and outages may succeed on a later attempt; rejections won't
    pub fn is_retryable(&self) -> bool {
        matches!(self, BackendError::Timeout(_) | BackendError::Unavailable(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("The {0} form is already being submitted")]
    Busy(FormId),
}

impl IntakeError {
    pub fn validation<T: fmt::Display>(field: &str, message: T) -> Self {
        IntakeError::Validation {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// True when the user can fix the problem by editing the form
    pub fn is_validation(&self) -> bool {
        matches!(self, IntakeError::Validation { .. } | IntakeError::Store(_))
    }
}
