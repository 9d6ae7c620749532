//! File-based credentials provider adapter.
//!
//! Wraps [`CredentialsManager`] so the API client can read the bearer token
//! through the [`CredentialsProvider`] trait.

use async_trait::async_trait;
use std::path::Path;

use crate::auth::credentials::{Credentials, CredentialsManager};
use crate::traits::{CredentialsError, CredentialsProvider};

/// File-based credentials provider.
///
/// The token is stored in `~/.studio/storage.json` under `authToken`.
///
/// # Example
///
/// ```ignore
/// use studio::adapters::FileCredentialsProvider;
/// use studio::traits::CredentialsProvider;
///
/// let provider = FileCredentialsProvider::new()?;
/// if let Some(creds) = provider.load().await? {
///     println!("token present: {}", creds.has_token());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileCredentialsProvider {
    manager: CredentialsManager,
}

impl FileCredentialsProvider {
    /// Create a provider for the default storage location.
    ///
    /// # Returns
    /// The provider, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CredentialsError> {
        CredentialsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| {
                CredentialsError::Other("Failed to determine home directory".to_string())
            })
    }

    /// Create a provider storing its file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            manager: CredentialsManager::in_dir(dir),
        }
    }

    pub fn manager(&self) -> &CredentialsManager {
        &self.manager
    }

    pub fn storage_path(&self) -> &Path {
        self.manager.storage_path()
    }
}

#[async_trait]
impl CredentialsProvider for FileCredentialsProvider {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let creds = self.manager.load()?;
        if creds.has_token() {
            Ok(Some(creds))
        } else {
            Ok(None)
        }
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        self.manager.save(creds)
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.manager.clear()
    }
}
