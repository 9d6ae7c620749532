//! Runtime configuration.
//!
//! Values come from defaults, then `STUDIO_*` environment variables, then
//! command-line flags (applied by the caller through the `with_*` builders).

use std::path::PathBuf;
use std::time::Duration;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GENERATION_TIMEOUT};
use crate::auth::credentials::STORAGE_DIR;
use crate::error::{StudioError, StudioResult};

pub const ENV_API_BASE_URL: &str = "STUDIO_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "STUDIO_REQUEST_TIMEOUT_SECS";
pub const ENV_GENERATION_TIMEOUT_SECS: &str = "STUDIO_GENERATION_TIMEOUT_SECS";
pub const ENV_HOME: &str = "STUDIO_HOME";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "studio.log";

/// Application configuration.
///
/// # Example
///
/// ```ignore
/// use studio::config::StudioConfig;
///
/// let config = StudioConfig::from_env().with_api_base_url("http://localhost:4000/");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Backend base URL
    pub api_base_url: String,
    /// Timeout for non-generation calls
    pub request_timeout: Duration,
    /// Timeout for generation calls
    pub generation_timeout: Duration,
    /// Directory holding the token store and the log file
    pub data_dir: PathBuf,
    /// Problems found while reading the environment, logged once logging is up
    pub warnings: Vec<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            generation_timeout: GENERATION_TIMEOUT,
            data_dir: default_data_dir(),
            warnings: Vec::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(STORAGE_DIR))
        .unwrap_or_else(|| PathBuf::from(STORAGE_DIR))
}

impl StudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = read(ENV_API_BASE_URL) {
            config.api_base_url = url;
        }
        if let Some(dir) = read(ENV_HOME) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = read(ENV_REQUEST_TIMEOUT_SECS) {
            match parse_secs(&raw) {
                Some(timeout) => config.request_timeout = timeout,
                None => config.warnings.push(format!(
                    "Ignoring {}={:?}: expected a positive number of seconds",
                    ENV_REQUEST_TIMEOUT_SECS, raw
                )),
            }
        }
        if let Some(raw) = read(ENV_GENERATION_TIMEOUT_SECS) {
            match parse_secs(&raw) {
                Some(timeout) => config.generation_timeout = timeout,
                None => config.warnings.push(format!(
                    "Ignoring {}={:?}: expected a positive number of seconds",
                    ENV_GENERATION_TIMEOUT_SECS, raw
                )),
            }
        }

        config
    }

    /// Check that the base URL is an http(s) URL.
    pub fn validate(&self) -> StudioResult<()> {
        let url = self.api_base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(StudioError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.api_base_url
            )))
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

fn parse_secs(raw: &str) -> Option<Duration> {
    raw.parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}
