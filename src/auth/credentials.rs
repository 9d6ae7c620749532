//! Local token storage.
//!
//! The bearer token lives in `~/.studio/storage.json` under the fixed key
//! `authToken`. There is no login or refresh flow: the token is written with
//! `studio --set-token` and read before every request.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::traits::CredentialsError;

/// The storage directory name under the home directory.
pub const STORAGE_DIR: &str = ".studio";

/// The storage file name.
pub const STORAGE_FILE: &str = "storage.json";

/// Key under which the bearer token is stored.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Contents of the storage file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    #[serde(rename = "authToken", default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Credentials {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(token.into()),
        }
    }

    /// The token to send, ignoring blank values.
    pub fn bearer_token(&self) -> Option<&str> {
        self.auth_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.bearer_token().is_some()
    }
}

/// Reads and writes the storage file.
#[derive(Debug, Clone)]
pub struct CredentialsManager {
    storage_path: PathBuf,
}

impl CredentialsManager {
    /// Create a manager for `~/.studio/storage.json`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        Some(Self::in_dir(home.join(STORAGE_DIR)))
    }

    /// Create a manager storing its file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            storage_path: dir.as_ref().join(STORAGE_FILE),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Load the stored credentials.
    ///
    /// A missing file yields default (empty) credentials.
    pub fn load(&self) -> Result<Credentials, CredentialsError> {
        if !self.storage_path.exists() {
            return Ok(Credentials::default());
        }

        let file = File::open(&self.storage_path)
            .map_err(|e| CredentialsError::LoadFailed(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CredentialsError::Serialization(e.to_string()))
    }

    /// Save credentials, creating the parent directory if needed.
    pub fn save(&self, credentials: &Credentials) -> Result<(), CredentialsError> {
        if let Some(parent) = self.storage_path.parent() {
            fs::create_dir_all(parent).map_err(|e| CredentialsError::Io(e.to_string()))?;
        }

        let file = File::create(&self.storage_path)
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, credentials)
            .map_err(|e| CredentialsError::Serialization(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| CredentialsError::SaveFailed(e.to_string()))
    }

    /// Remove the storage file. A missing file is not an error.
    pub fn clear(&self) -> Result<(), CredentialsError> {
        if !self.storage_path.exists() {
            return Ok(());
        }
        fs::remove_file(&self.storage_path).map_err(|e| CredentialsError::ClearFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bearer_token_ignores_blank() {
        assert_eq!(Credentials::default().bearer_token(), None);
        assert_eq!(Credentials::with_token("   ").bearer_token(), None);
        assert_eq!(Credentials::with_token(" abc ").bearer_token(), Some("abc"));
        assert!(Credentials::with_token("abc").has_token());
    }

    #[test]
    fn test_serializes_under_fixed_key() {
        let json = serde_json::to_value(Credentials::with_token("tok")).unwrap();
        assert_eq!(json, serde_json::json!({ AUTH_TOKEN_KEY: "tok" }));

        let empty = serde_json::to_value(Credentials::default()).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let manager = CredentialsManager::in_dir(temp_dir.path());
        assert_eq!(manager.load().unwrap(), Credentials::default());
    }

    #[test]
    fn test_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let manager = CredentialsManager::in_dir(temp_dir.path().join("nested"));

        manager.save(&Credentials::with_token("secret")).unwrap();
        assert!(manager.storage_path().exists());
        assert_eq!(manager.load().unwrap().bearer_token(), Some("secret"));

        manager.clear().unwrap();
        assert!(!manager.storage_path().exists());
        manager.clear().unwrap();
    }

    #[test]
    fn test_load_ignores_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let manager = CredentialsManager::in_dir(temp_dir.path());
        fs::write(
            manager.storage_path(),
            r#"{"authToken":"abc","theme":"dark"}"#,
        )
        .unwrap();
        assert_eq!(manager.load().unwrap().bearer_token(), Some("abc"));
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let manager = CredentialsManager::in_dir(temp_dir.path());
        fs::write(manager.storage_path(), "not json").unwrap();
        assert!(matches!(
            manager.load(),
            Err(CredentialsError::Serialization(_))
        ));
    }
}
