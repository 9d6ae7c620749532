//! Normalized successful response.

/// A decoded 2xx response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, status: u16) -> Self {
        Self {
            data,
            status,
            success: (200..300).contains(&status),
        }
    }

    /// Discard the envelope.
    pub fn into_data(self) -> T {
        self.data
    }
}
