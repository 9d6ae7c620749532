//! Unified error type for the studio application.

use thiserror::Error;

use super::api_error::ApiError;
use super::category::ErrorCategory;
use crate::traits::CredentialsError;

/// Unified error type for the studio application.
///
/// Service calls fail with [`ApiError`]; this type additionally covers the
/// local concerns around them (token storage, configuration, IO).
#[derive(Debug, Error)]
pub enum StudioError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StudioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StudioError::Api(err) => err.category(),
            StudioError::Credentials(_) | StudioError::Io(_) => ErrorCategory::System,
            StudioError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            StudioError::Api(err) => err.is_retryable(),
            _ => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            StudioError::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

/// Type alias for Results using StudioError.
pub type StudioResult<T> = Result<T, StudioError>;
