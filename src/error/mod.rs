//! Unified error handling for studio.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **ApiError**: The typed error produced by the API client and services
//! - **StudioError**: Wraps `ApiError` together with local failures
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection failure, timeout | Yes |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | Rejected request (4xx), bad body | No |
//! | User | Blank or unsupported input | No |
//! | System | Token file, IO | No |
//! | Configuration | Settings | No |

mod api_error;
mod category;
mod studio_error;

pub use api_error::{ApiError, ApiErrorKind};
pub use category::ErrorCategory;
pub use studio_error::{StudioError, StudioResult};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::traits::CredentialsError;

    #[test]
    fn test_error_unification() {
        let errors: Vec<StudioError> = vec![
            ApiError::timeout(30_000).into(),
            ApiError::http(500, "boom").into(),
            ApiError::validation("Text is required for text input format").into(),
            CredentialsError::Io("read-only filesystem".to_string()).into(),
            StudioError::Config("bad".to_string()),
        ];

        let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category()).collect();
        assert_eq!(
            categories,
            vec![
                ErrorCategory::Network,
                ErrorCategory::Server,
                ErrorCategory::User,
                ErrorCategory::System,
                ErrorCategory::Configuration,
            ]
        );

        for err in &errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
