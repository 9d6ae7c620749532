//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable and scripted responses
//! - [`InMemoryCredentials`] - In-memory token storage

pub mod credentials;
pub mod http;

pub use credentials::InMemoryCredentials;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
