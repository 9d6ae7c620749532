//! API client with timeout, retry and typed error mapping.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::request::{RequestConfig, DEFAULT_TIMEOUT};
use super::response::ApiResponse;
use crate::config::StudioConfig;
use crate::error::ApiError;
use crate::traits::{
    CredentialsProvider, FormFile, Headers, HttpClient, HttpError, HttpRequest, Method,
    ProgressCallback, Response, UploadRequest,
};

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Client for the generation backend.
///
/// Cheap to clone; clones share the transport and credentials provider.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialsProvider>,
    base_url: String,
    default_timeout: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

impl ApiClient {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new(http: Arc<dyn HttpClient>, credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self {
            http,
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client using the configured base URL and timeout.
    pub fn from_config(
        config: &StudioConfig,
        http: Arc<dyn HttpClient>,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> Self {
        Self::new(http, credentials)
            .with_base_url(config.api_base_url.clone())
            .with_default_timeout(config.request_timeout)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Resolve an endpoint against the base URL.
    ///
    /// Endpoints starting with `http` are returned unchanged; anything else
    /// is joined to the base with exactly one `/`.
    pub fn build_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http") {
            return endpoint.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Default headers merged with per-call overrides.
    async fn build_headers(&self, overrides: &Headers, json_body: bool) -> Headers {
        let mut headers = Headers::new();
        if json_body {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers.insert("Accept".to_string(), "application/json".to_string());

        match self.credentials.load().await {
            Ok(Some(creds)) => {
                if let Some(token) = creds.bearer_token() {
                    headers.insert("Authorization".to_string(), format!("Bearer {}", token));
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Could not read stored token, sending without it: {}", e),
        }

        for (name, value) in overrides {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    fn timeout_for(&self, config: &RequestConfig) -> Duration {
        config.timeout.unwrap_or(self.default_timeout)
    }

    /// Send a request and decode the response into `T`.
    ///
    /// Retries up to `config.retries` times when the failure is retryable,
    /// sleeping `config.retry_delay` between attempts.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.build_url(endpoint);
        let timeout = self.timeout_for(&config);
        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: self.build_headers(&config.headers, true).await,
            body: body.map(|b| b.to_string()),
        };

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(%method, %url, attempt, "Sending request");

            let result = match tokio::time::timeout(timeout, self.http.send(request.clone())).await
            {
                Ok(Ok(response)) => Self::decode::<T>(response),
                Ok(Err(e)) => Err(Self::map_transport_error(e, timeout)),
                Err(_) => Err(ApiError::timeout(timeout.as_millis())),
            };

            match result {
                Ok(response) => return Ok(response),
                Err(err) if attempt <= config.retries && err.is_retryable() => {
                    warn!(
                        %method,
                        %url,
                        attempt,
                        code = err.error_code(),
                        "Request failed, retrying in {:?}: {}",
                        config.retry_delay,
                        err
                    );
                    tokio::time::sleep(config.retry_delay).await;
                }
                Err(err) => {
                    error!(
                        %method,
                        %url,
                        attempt,
                        code = err.error_code(),
                        category = err.category().as_str(),
                        "Request failed: {}",
                        err
                    );
                    return Err(err);
                }
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::Get, endpoint, None, config).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = Self::encode(body)?;
        self.request(Method::Post, endpoint, Some(body), config).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = Self::encode(body)?;
        self.request(Method::Put, endpoint, Some(body), config).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let body = Self::encode(body)?;
        self.request(Method::Patch, endpoint, Some(body), config).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.request(Method::Delete, endpoint, None, config).await
    }

    /// Send a multipart form with one file part.
    ///
    /// The transport sets the multipart content type. Uploads are never
    /// retried, whatever `config.retries` says.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: Vec<(String, String)>,
        file: FormFile,
        progress: Option<ProgressCallback>,
        config: RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self.build_url(endpoint);
        let timeout = self.timeout_for(&config);
        let mut headers = self.build_headers(&config.headers, false).await;
        headers.retain(|name, _| !name.eq_ignore_ascii_case("content-type"));

        debug!(%url, file = %file.file_name, size = file.bytes.len(), "Uploading file");
        let request = UploadRequest {
            url: url.clone(),
            headers,
            fields,
            file,
        };

        let result = match tokio::time::timeout(timeout, self.http.upload(request, progress)).await
        {
            Ok(Ok(response)) => Self::decode::<T>(response),
            Ok(Err(e)) => Err(Self::map_transport_error(e, timeout)),
            Err(_) => Err(ApiError::timeout(timeout.as_millis())),
        };
        if let Err(err) = &result {
            error!(%url, code = err.error_code(), "Upload failed: {}", err);
        }
        result
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body)
            .map_err(|e| ApiError::validation(format!("Failed to serialize request: {}", e)))
    }

    fn map_transport_error(err: HttpError, timeout: Duration) -> ApiError {
        match err {
            HttpError::Timeout(_) => ApiError::timeout(timeout.as_millis()),
            HttpError::InvalidUrl(msg) => ApiError::validation(format!("Invalid URL: {}", msg)),
            other => ApiError::network(other.to_string()),
        }
    }

    /// Parse the body as JSON, or as a JSON string when it is not JSON.
    fn body_value(response: &Response) -> Option<Value> {
        if response.is_json() {
            if let Ok(value) = serde_json::from_slice::<Value>(&response.body) {
                return Some(value);
            }
        }
        let text = String::from_utf8_lossy(&response.body).into_owned();
        if text.is_empty() {
            None
        } else {
            Some(Value::String(text))
        }
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status;

        if !response.is_success() {
            let reason = reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown Status");
            return Err(ApiError::from_response(
                status,
                reason,
                Self::body_value(&response),
            ));
        }

        let data = if response.is_json() && response.body.is_empty() {
            serde_json::from_value::<T>(Value::Null)
        } else if response.is_json() {
            serde_json::from_slice::<T>(&response.body)
        } else {
            let text = String::from_utf8_lossy(&response.body).into_owned();
            serde_json::from_value::<T>(Value::String(text))
        };

        data.map(|data| ApiResponse::new(data, status)).map_err(|e| {
            debug!(status, "Response body did not match the expected shape: {}", e);
            ApiError::parse(status)
        })
    }
}
