//! Error types for search parameter updates.
//!
//! A missing host capability is never an error; these variants cover the
//! failures that propagate to the caller instead.

use thiserror::Error;

/// Main error type for search parameter operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The current address could not be parsed
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The host navigation session rejected an operation
    #[error("Navigation session error: {0}")]
    Session(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// History state could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Specialized result type for search parameter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAddress(_) => "INVALID_ADDRESS",
            Self::Session(_) => "SESSION_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(self, Self::Session(_) | Self::ConfigError(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidAddress(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
