//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait. Uploads stream the
//! file part in fixed-size chunks so progress can be reported as reqwest
//! pulls each chunk into the request body.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;

use crate::traits::{
    Headers, HttpClient, HttpError, HttpRequest, Method, ProgressCallback, Response, UploadRequest,
};

/// Size of each streamed chunk of an upload body.
const UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// HTTP client implementation using reqwest.
///
/// No client-level timeout is configured here; [`crate::api::ApiClient`]
/// enforces per-call timeouts by cancelling the request future.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    fn builder_for(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Patch => self.client.patch(url),
            Method::Delete => self.client.delete(url),
        }
    }

    async fn into_response(response: reqwest::Response) -> Result<Response, HttpError> {
        let status = response.status().as_u16();
        let headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;
        Ok(Response::with_headers(status, headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a buffer into chunks of at most `size` bytes without copying.
fn split_chunks(bytes: Bytes, size: usize) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(bytes.len() / size + 1);
    let mut offset = 0;
    while offset < bytes.len() {
        let end = (offset + size).min(bytes.len());
        chunks.push(bytes.slice(offset..end));
        offset = end;
    }
    chunks
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<Response, HttpError> {
        let mut builder = self.builder_for(request.method, &request.url);
        builder = Self::apply_headers(builder, &request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::convert_error)?;
        Self::into_response(response).await
    }

    async fn upload(
        &self,
        request: UploadRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<Response, HttpError> {
        let total = request.file.bytes.len();
        if total == 0 {
            if let Some(callback) = &progress {
                callback(1.0);
            }
        }

        let mut sent = 0usize;
        let chunks = split_chunks(request.file.bytes.clone(), UPLOAD_CHUNK_SIZE);
        let stream = futures::stream::iter(chunks).map(move |chunk| {
            sent += chunk.len();
            if let Some(callback) = &progress {
                callback(sent as f64 / total as f64);
            }
            Ok::<Bytes, std::io::Error>(chunk)
        });

        let mut part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(stream),
            total as u64,
        )
        .file_name(request.file.file_name.clone());
        if let Some(content_type) = &request.file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| HttpError::Other(e.to_string()))?;
        }

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in request.fields {
            form = form.text(name, value);
        }
        form = form.part(request.file.field_name.clone(), part);

        let builder = Self::apply_headers(self.client.post(&request.url), &request.headers)
            .multipart(form);
        let response = builder.send().await.map_err(Self::convert_error)?;
        Self::into_response(response).await
    }
}
