//! Error handling for the MindConnect view-model

use std::fmt;
use thiserror::Error;

use mindconnect_intake::IntakeError;

/// Unified error type for the MindConnect crates
#[derive(Error, Debug)]
pub enum Error {
    /// Form extraction, state or submission failures
    #[error("Intake error: {0}")]
    Intake(#[from] IntakeError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background worker registration errors
    #[error("Worker error: {0}")]
    Worker(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new worker error
    pub fn worker<T: fmt::Display>(msg: T) -> Self {
        Error::Worker(msg.to_string())
    }

    /// The underlying intake error, if any
    pub fn as_intake(&self) -> Option<&IntakeError> {
        match self {
            Error::Intake(err) => Some(err),
            _ => None,
        }
    }
}
