//! Coarse error classes, each with a recovery hint for the user.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failure or timeout
    Network,
    /// Backend answered 5xx
    Server,
    /// Backend rejected the request (4xx) or sent something unreadable
    Client,
    /// Blank or unsupported input; nothing was sent
    User,
    /// Token file or other local IO
    System,
    /// Bad settings
    Configuration,
}

impl ErrorCategory {
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Lowercase name used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the backend is running and reachable",
            ErrorCategory::Server => "The backend failed; try again in a moment",
            ErrorCategory::Client => "The backend rejected the request; check the input",
            ErrorCategory::User => "Fill in the input for the selected tab",
            ErrorCategory::System => "Check permissions on the studio data directory",
            ErrorCategory::Configuration => {
                "Check STUDIO_API_BASE_URL and the --base-url flag"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
