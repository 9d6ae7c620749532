use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::content::{ContentType, InputFormat};
use super::{deserialize_nullable_string, deserialize_url_list};

/// A file selected for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct FileInput {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl FileInput {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The single input of a generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationPayload {
    Text(String),
    Url(String),
    File(FileInput),
}

impl GenerationPayload {
    pub fn input_format(&self) -> InputFormat {
        match self {
            GenerationPayload::Text(_) => InputFormat::Text,
            GenerationPayload::Url(_) => InputFormat::Url,
            GenerationPayload::File(_) => InputFormat::File,
        }
    }
}

/// A typed generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub payload: GenerationPayload,
}

impl GenerationRequest {
    pub fn text(content_type: ContentType, text: impl Into<String>) -> Self {
        Self {
            content_type,
            payload: GenerationPayload::Text(text.into()),
        }
    }

    pub fn url(content_type: ContentType, url: impl Into<String>) -> Self {
        Self {
            content_type,
            payload: GenerationPayload::Url(url.into()),
        }
    }

    pub fn file(content_type: ContentType, file: FileInput) -> Self {
        Self {
            content_type,
            payload: GenerationPayload::File(file),
        }
    }

    pub fn input_format(&self) -> InputFormat {
        self.payload.input_format()
    }
}

/// Loosely typed input for `generate_content`; only the field matching the
/// input format is consulted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationInput {
    pub url: Option<String>,
    pub text: Option<String>,
    pub file: Option<FileInput>,
}

impl GenerationInput {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_file(mut self, file: FileInput) -> Self {
        self.file = Some(file);
        self
    }
}

/// JSON body of `/url/process`.
#[derive(Debug, Clone, Serialize)]
pub struct UrlProcessBody<'a> {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub url: &'a str,
}

/// JSON body of `/text/process`.
#[derive(Debug, Clone, Serialize)]
pub struct TextProcessBody<'a> {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Processing,
    Completed,
    Failed,
}

/// Rendered result of a generation: text or a list of image URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    Text(String),
    Images(Vec<String>),
}

impl GenerationOutput {
    /// Pick the output by presence. Images win whenever the list is non-empty.
    pub fn select(result: Option<&str>, result_urls: &[String]) -> Option<Self> {
        if !result_urls.is_empty() {
            return Some(GenerationOutput::Images(result_urls.to_vec()));
        }
        result
            .filter(|r| !r.is_empty())
            .map(|r| GenerationOutput::Text(r.to_string()))
    }
}

/// Generation record returned by the process endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub status: GenerationStatus,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default, deserialize_with = "deserialize_url_list")]
    pub result_url: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub updated_at: String,
}

impl GenerationResponse {
    pub fn output(&self) -> Option<GenerationOutput> {
        GenerationOutput::select(self.result.as_deref(), &self.result_url)
    }
}
