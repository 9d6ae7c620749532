//! In-memory token store for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::auth::credentials::Credentials;
use crate::traits::{CredentialsError, CredentialsProvider};

#[derive(Debug, Default)]
struct Store {
    credentials: Option<Credentials>,
    fail_loads: bool,
    fail_saves: bool,
}

/// Token store kept in memory.
///
/// Clones share the same store, so a test can hand one clone to the API
/// client and change the token through the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentials {
    store: Arc<Mutex<Store>>,
}

impl InMemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.set_credentials(Some(Credentials::with_token(token)));
        provider
    }

    pub fn set_load_should_fail(&self, fail: bool) {
        self.store.lock().unwrap().fail_loads = fail;
    }

    pub fn set_save_should_fail(&self, fail: bool) {
        self.store.lock().unwrap().fail_saves = fail;
    }

    pub fn get_credentials(&self) -> Option<Credentials> {
        self.store.lock().unwrap().credentials.clone()
    }

    pub fn set_credentials(&self, creds: Option<Credentials>) {
        self.store.lock().unwrap().credentials = creds;
    }
}

#[async_trait]
impl CredentialsProvider for InMemoryCredentials {
    async fn load(&self) -> Result<Option<Credentials>, CredentialsError> {
        let store = self.store.lock().unwrap();
        if store.fail_loads {
            return Err(CredentialsError::LoadFailed("simulated".to_string()));
        }
        Ok(store.credentials.clone().filter(Credentials::has_token))
    }

    async fn save(&self, creds: &Credentials) -> Result<(), CredentialsError> {
        let mut store = self.store.lock().unwrap();
        if store.fail_saves {
            return Err(CredentialsError::SaveFailed("simulated".to_string()));
        }
        store.credentials = Some(creds.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialsError> {
        self.store.lock().unwrap().credentials = None;
        Ok(())
    }
}
