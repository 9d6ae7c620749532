//! Typed error returned by the API client and the service layer.

use std::fmt;

use serde_json::Value;

use super::category::ErrorCategory;

/// Classification of an [`ApiError`], used for retry decisions and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// A required input was missing; raised before any request.
    Validation,
    /// The requested input format is not supported yet.
    NotImplemented,
    /// The request exceeded its timeout and was cancelled.
    Timeout,
    /// The request never produced an HTTP response.
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// A 2xx response body could not be decoded.
    Parse,
}

/// Error surfaced to callers of the API client.
///
/// `status` is the HTTP status when a response was received and `0`
/// otherwise. `details` carries the parsed error body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub status: u16,
    pub code: Option<String>,
    pub details: Option<Value>,
}

impl ApiError {
    fn new(kind: ApiErrorKind, message: impl Into<String>, status: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status,
            code: None,
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message, 0)
    }

    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotImplemented, message, 0)
    }

    pub fn timeout(timeout_ms: u128) -> Self {
        Self::new(
            ApiErrorKind::Timeout,
            format!("Request timed out after {} ms", timeout_ms),
            0,
        )
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message, 0)
    }

    pub fn parse(status: u16) -> Self {
        Self::new(ApiErrorKind::Parse, "Failed to parse response", status)
    }

    /// Build an error for a non-2xx response.
    ///
    /// The message is the body's `message` field when it is a string,
    /// otherwise `HTTP <status>: <reason>`.
    pub fn from_response(status: u16, reason: &str, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}: {}", status, reason));
        let code = body
            .as_ref()
            .and_then(|b| b.get("code"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            kind: ApiErrorKind::Http,
            message,
            status,
            code,
            details: body,
        }
    }

    /// Error constructed from a bare status and message, as a backend stub
    /// or test double would report it.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Http, message, status)
    }

    /// Whether the client may retry the request that produced this error.
    ///
    /// Timeouts, network failures and 5xx responses qualify; 4xx responses
    /// and local errors never do.
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ApiErrorKind::Timeout | ApiErrorKind::Network => true,
            ApiErrorKind::Http => self.status >= 500,
            ApiErrorKind::Validation | ApiErrorKind::NotImplemented | ApiErrorKind::Parse => false,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.kind {
            ApiErrorKind::Validation | ApiErrorKind::NotImplemented => ErrorCategory::User,
            ApiErrorKind::Timeout | ApiErrorKind::Network => ErrorCategory::Network,
            ApiErrorKind::Http if self.status >= 500 => ErrorCategory::Server,
            ApiErrorKind::Http | ApiErrorKind::Parse => ErrorCategory::Client,
        }
    }

    /// The single string shown inline in the active view.
    pub fn user_message(&self) -> String {
        self.message.clone()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Validation => "E_API_VALIDATION",
            ApiErrorKind::NotImplemented => "E_API_UNSUPPORTED",
            ApiErrorKind::Timeout => "E_API_TIMEOUT",
            ApiErrorKind::Network => "E_API_NETWORK",
            ApiErrorKind::Http => "E_API_HTTP",
            ApiErrorKind::Parse => "E_API_PARSE",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status > 0 {
            write!(f, "{} (status {})", self.message, self.status)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_prefers_body_message() {
        let err = ApiError::from_response(
            422,
            "Unprocessable Entity",
            Some(json!({"message": "bad url", "code": "INVALID_URL"})),
        );
        assert_eq!(err.message, "bad url");
        assert_eq!(err.status, 422);
        assert_eq!(err.code.as_deref(), Some("INVALID_URL"));
        assert_eq!(err.details, Some(json!({"message": "bad url", "code": "INVALID_URL"})));
    }

    #[test]
    fn test_from_response_falls_back_to_status_line() {
        let err = ApiError::from_response(404, "Not Found", Some(json!({"error": "nope"})));
        assert_eq!(err.message, "HTTP 404: Not Found");
        assert!(err.code.is_none());

        let err = ApiError::from_response(502, "Bad Gateway", None);
        assert_eq!(err.message, "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_retry_classification() {
        assert!(ApiError::timeout(30_000).is_retryable());
        assert!(ApiError::network("connection refused").is_retryable());
        assert!(ApiError::http(500, "boom").is_retryable());
        assert!(ApiError::http(503, "unavailable").is_retryable());

        assert!(!ApiError::http(400, "bad request").is_retryable());
        assert!(!ApiError::http(404, "missing").is_retryable());
        assert!(!ApiError::validation("Text is required").is_retryable());
        assert!(!ApiError::not_implemented("file").is_retryable());
        assert!(!ApiError::parse(200).is_retryable());
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(ApiError::timeout(1).category(), ErrorCategory::Network);
        assert_eq!(ApiError::http(500, "x").category(), ErrorCategory::Server);
        assert_eq!(ApiError::http(401, "x").category(), ErrorCategory::Client);
        assert_eq!(ApiError::validation("x").category(), ErrorCategory::User);
    }

    #[test]
    fn test_display_includes_status_when_present() {
        assert_eq!(ApiError::http(500, "boom").to_string(), "boom (status 500)");
        assert_eq!(ApiError::network("refused").to_string(), "refused");
    }
}
