//! Content generation endpoints.

use std::time::Duration;

use tracing::info;

use crate::api::{ApiClient, ApiResponse, RequestConfig, GENERATION_TIMEOUT};
use crate::error::ApiError;
use crate::models::{
    ContentType, FileInput, GenerationInput, GenerationPayload, GenerationRequest,
    GenerationResponse, InputFormat, TextProcessBody, UrlProcessBody,
};
use crate::traits::{FormFile, ProgressCallback};

pub const URL_PROCESS_ENDPOINT: &str = "/url/process";
pub const TEXT_PROCESS_ENDPOINT: &str = "/text/process";
pub const FILE_PROCESS_ENDPOINT: &str = "/file/process";

pub const URL_REQUIRED: &str = "URL is required for URL input format";
pub const TEXT_REQUIRED: &str = "Text is required for text input format";
pub const FILE_NOT_IMPLEMENTED: &str = "File input is not implemented yet";

/// Submits generation requests.
#[derive(Debug, Clone)]
pub struct GenerationService {
    client: ApiClient,
    timeout: Duration,
}

impl GenerationService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            timeout: GENERATION_TIMEOUT,
        }
    }

    /// Override the generation timeout (10 minutes by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn config(&self) -> RequestConfig {
        RequestConfig::new().with_timeout(self.timeout)
    }

    /// `POST /url/process` with `{type, url}`.
    pub async fn generate_from_url(
        &self,
        content_type: ContentType,
        url: &str,
    ) -> Result<ApiResponse<GenerationResponse>, ApiError> {
        info!(%content_type, url, "Generating from URL");
        let body = UrlProcessBody { content_type, url };
        self.client
            .post(URL_PROCESS_ENDPOINT, &body, self.config())
            .await
    }

    /// `POST /text/process` with `{type, text}`.
    pub async fn generate_from_text(
        &self,
        content_type: ContentType,
        text: &str,
    ) -> Result<ApiResponse<GenerationResponse>, ApiError> {
        info!(%content_type, chars = text.chars().count(), "Generating from text");
        let body = TextProcessBody { content_type, text };
        self.client
            .post(TEXT_PROCESS_ENDPOINT, &body, self.config())
            .await
    }

    /// `POST /file/process` as multipart `type` + `file`.
    pub async fn generate_from_file(
        &self,
        content_type: ContentType,
        file: FileInput,
        progress: Option<ProgressCallback>,
    ) -> Result<ApiResponse<GenerationResponse>, ApiError> {
        info!(%content_type, file = %file.file_name, size = file.len(), "Generating from file");
        let fields = vec![("type".to_string(), content_type.as_str().to_string())];
        let form_file = FormFile {
            field_name: "file".to_string(),
            file_name: file.file_name,
            content_type: file.content_type,
            bytes: file.bytes,
        };
        self.client
            .upload(FILE_PROCESS_ENDPOINT, fields, form_file, progress, self.config())
            .await
    }

    /// Route loosely typed input by format.
    ///
    /// The field matching `format` must be non-blank or the call fails
    /// without a request. File input is rejected until uploads are wired
    /// into the create workflow.
    pub async fn generate_content(
        &self,
        content_type: ContentType,
        format: InputFormat,
        input: GenerationInput,
    ) -> Result<ApiResponse<GenerationResponse>, ApiError> {
        match format {
            InputFormat::Url => {
                let url = input
                    .url
                    .as_deref()
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| ApiError::validation(URL_REQUIRED))?;
                self.generate_from_url(content_type, url).await
            }
            InputFormat::Text => {
                let text = input
                    .text
                    .as_deref()
                    .filter(|t| !t.trim().is_empty())
                    .ok_or_else(|| ApiError::validation(TEXT_REQUIRED))?;
                self.generate_from_text(content_type, text).await
            }
            InputFormat::File => Err(ApiError::not_implemented(FILE_NOT_IMPLEMENTED)),
        }
    }

    /// Submit a typed request.
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<ApiResponse<GenerationResponse>, ApiError> {
        match request.payload {
            GenerationPayload::Text(text) => {
                if text.trim().is_empty() {
                    return Err(ApiError::validation(TEXT_REQUIRED));
                }
                self.generate_from_text(request.content_type, &text).await
            }
            GenerationPayload::Url(url) => {
                let url = url.trim();
                if url.is_empty() {
                    return Err(ApiError::validation(URL_REQUIRED));
                }
                self.generate_from_url(request.content_type, url).await
            }
            GenerationPayload::File(file) => {
                self.generate_from_file(request.content_type, file, None)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
    use crate::error::ApiErrorKind;
    use crate::models::GenerationStatus;
    use crate::traits::{Method, Response};
    use serde_json::json;
    use std::sync::Arc;

    fn service(http: &MockHttpClient) -> GenerationService {
        let client = ApiClient::new(Arc::new(http.clone()), Arc::new(InMemoryCredentials::new()))
            .with_base_url("http://api.test");
        GenerationService::new(client)
    }

    fn completed(result: &str) -> MockResponse {
        MockResponse::Success(Response::json_body(
            200,
            &json!({
                "id": "g1",
                "type": "key-points",
                "status": "completed",
                "result": result,
                "createdAt": "2024-01-15T10:00:00Z",
                "updatedAt": "2024-01-15T10:00:00Z"
            }),
        ))
    }

    #[tokio::test]
    async fn test_generate_from_url() {
        let http = MockHttpClient::new();
        http.set_response("http://api.test/url/process", completed("ABC"));

        let response = service(&http)
            .generate_from_url(ContentType::KeyPoints, "https://example.com")
            .await
            .unwrap();
        assert_eq!(response.data.status, GenerationStatus::Completed);

        let recorded = &http.get_requests()[0];
        assert_eq!(recorded.method, Method::Post);
        assert_eq!(
            recorded.json(),
            Some(json!({"type": "key-points", "url": "https://example.com"}))
        );
    }

    #[tokio::test]
    async fn test_generate_content_routes_text() {
        let http = MockHttpClient::new();
        http.set_response("http://api.test/text/process", completed("ok"));

        let input = GenerationInput::default()
            .with_text("hello")
            .with_url("https://ignored");
        service(&http)
            .generate_content(ContentType::SmartSummary, InputFormat::Text, input)
            .await
            .unwrap();

        let recorded = &http.get_requests()[0];
        assert_eq!(recorded.url, "http://api.test/text/process");
        assert_eq!(
            recorded.json(),
            Some(json!({"type": "smart-summary", "text": "hello"}))
        );
    }

    #[tokio::test]
    async fn test_generate_content_requires_matching_field() {
        let http = MockHttpClient::new();
        let service = service(&http);

        let err = service
            .generate_content(
                ContentType::KeyPoints,
                InputFormat::Url,
                GenerationInput::default().with_text("text only"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Validation);
        assert_eq!(err.message, URL_REQUIRED);

        let err = service
            .generate_content(
                ContentType::KeyPoints,
                InputFormat::Text,
                GenerationInput::default().with_text("   "),
            )
            .await
            .unwrap_err();
        assert_eq!(err.message, TEXT_REQUIRED);
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_content_file_always_fails_fast() {
        let http = MockHttpClient::new();
        let input = GenerationInput::default().with_file(FileInput::new("a.txt", "abc"));

        let err = service(&http)
            .generate_content(ContentType::KeyPoints, InputFormat::File, input)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotImplemented);
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_generate_dispatches_file_upload() {
        let http = MockHttpClient::new();
        http.set_response("http://api.test/file/process", completed("from file"));

        let file = FileInput::new("notes.txt", "abc").with_content_type("text/plain");
        let response = service(&http)
            .generate(GenerationRequest::file(ContentType::FlashCards, file))
            .await
            .unwrap();
        assert_eq!(response.data.result.as_deref(), Some("from file"));

        let recorded = &http.get_requests()[0];
        assert_eq!(
            recorded.fields,
            vec![("type".to_string(), "flash-cards".to_string())]
        );
        let part = recorded.file.as_ref().unwrap();
        assert_eq!(part.field_name, "file");
        assert_eq!(part.file_name, "notes.txt");
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_typed_payloads() {
        let http = MockHttpClient::new();
        let err = service(&http)
            .generate(GenerationRequest::url(ContentType::KeyPoints, " "))
            .await
            .unwrap_err();
        assert_eq!(err.message, URL_REQUIRED);
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_generation_timeout_override() {
        let http = MockHttpClient::new();
        http.set_response("http://api.test/text/process", completed("late"));
        http.set_delay(Duration::from_millis(200));

        let err = service(&http)
            .with_timeout(Duration::from_millis(10))
            .generate_from_text(ContentType::KeyPoints, "hi")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Timeout);
    }
}
