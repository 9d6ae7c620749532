use super::content::ContentType;
use super::generation::{GenerationOutput, GenerationResponse, GenerationStatus};
use super::history::HistoryItem;

/// The generation currently shown on the canvas.
///
/// Built either from a fresh [`GenerationResponse`] or from a stored
/// [`HistoryItem`] opened from the history screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProject {
    pub id: String,
    /// Raw wire value of the content type.
    pub content_type: String,
    pub input: String,
    pub input_url: String,
    pub status: Option<GenerationStatus>,
    pub output: Option<GenerationOutput>,
    pub created_at: String,
}

impl LoadedProject {
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type.parse().ok()
    }

    /// Result text, present only when the project has no image list.
    pub fn result_text(&self) -> Option<&str> {
        match &self.output {
            Some(GenerationOutput::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn image_urls(&self) -> &[String] {
        match &self.output {
            Some(GenerationOutput::Images(urls)) => urls,
            _ => &[],
        }
    }
}

impl From<GenerationResponse> for LoadedProject {
    fn from(response: GenerationResponse) -> Self {
        let output = response.output();
        Self {
            id: response.id,
            content_type: response.content_type.as_str().to_string(),
            input: String::new(),
            input_url: String::new(),
            status: Some(response.status),
            output,
            created_at: response.created_at,
        }
    }
}

impl From<HistoryItem> for LoadedProject {
    fn from(item: HistoryItem) -> Self {
        let output = item.output();
        Self {
            id: item.id,
            content_type: item.content_type,
            input: item.input,
            input_url: item.input_url,
            status: None,
            output,
            created_at: item.created_at,
        }
    }
}
