mod content;
mod generation;
mod history;
mod project;

pub use content::{ContentType, InputFormat};
pub use generation::{
    FileInput, GenerationInput, GenerationOutput, GenerationPayload, GenerationRequest,
    GenerationResponse, GenerationStatus, TextProcessBody, UrlProcessBody,
};
pub use history::{DeleteResponse, HistoryItem};
pub use project::LoadedProject;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize `resultUrl`, which the backend sends as a single
/// string, an array of strings, or null. Blank entries are dropped.
pub(crate) fn deserialize_url_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<Option<String>>),
    }

    let urls = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(url)) => vec![url],
        Some(OneOrMany::Many(urls)) => urls.into_iter().flatten().collect(),
    };

    Ok(urls
        .into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect())
}
