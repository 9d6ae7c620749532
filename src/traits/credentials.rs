//! Token store abstraction.
//!
//! The API client asks a provider for the bearer token before each request,
//! so tests can swap the token file for an in-memory store.

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Credentials;

/// Token store failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CredentialsError {
    #[error("Could not read token file: {0}")]
    LoadFailed(String),
    #[error("Could not write token file: {0}")]
    SaveFailed(String),
    #[error("Could not remove token file: {0}")]
    ClearFailed(String),
    #[error("Token directory unavailable: {0}")]
    Io(String),
    #[error("Token file is not valid JSON: {0}")]
    Serialization(String),
    #[error("{0}")]
    Other(String),
}

/// Where the bearer token comes from.
///
/// `load` returns `Ok(None)` when no usable token is stored; a blank token
/// counts as no token.
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError>;

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError>;

    /// Forget the stored token. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), CredentialsError>;
}
