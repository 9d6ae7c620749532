//! Generic HTTP client wrapper for the generation backend.
//!
//! [`ApiClient`] resolves endpoints against the base URL, attaches default
//! and bearer headers, enforces timeouts, retries transient failures and
//! maps every failure to [`crate::error::ApiError`].

pub mod client;
pub mod request;
pub mod response;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use request::{RequestConfig, DEFAULT_RETRY_DELAY, DEFAULT_TIMEOUT, GENERATION_TIMEOUT};
pub use response::ApiResponse;
