//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (JSON requests and multipart uploads)
//! - [`CredentialsProvider`] - Bearer token storage and retrieval

pub mod credentials;
pub mod http;

pub use credentials::{CredentialsError, CredentialsProvider};
pub use http::{
    FormFile, Headers, HttpClient, HttpError, HttpRequest, Method, ProgressCallback, Response,
    UploadRequest,
};
