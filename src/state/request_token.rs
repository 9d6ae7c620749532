//! Request fencing.
//!
//! Each kind of request (generation, project load, history fetch) owns a
//! [`RequestFence`]. Issuing a token supersedes every earlier one, so a
//! completion carrying an old token can be recognized and dropped.

use std::fmt;

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues monotonically increasing tokens and remembers the latest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFence {
    latest: u64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding all earlier ones.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Supersede every outstanding token without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    /// Whether `token` is the most recently issued one.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_wins() {
        let mut fence = RequestFence::new();
        let first = fence.issue();
        assert!(fence.is_current(first));

        let second = fence.issue();
        assert!(second > first);
        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
    }

    #[test]
    fn test_invalidate() {
        let mut fence = RequestFence::new();
        let token = fence.issue();
        fence.invalidate();
        assert!(!fence.is_current(token));
        assert_eq!(token.to_string(), "#1");
    }
}
