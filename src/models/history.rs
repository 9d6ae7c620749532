use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::content::ContentType;
use super::generation::GenerationOutput;
use super::{deserialize_nullable_string, deserialize_url_list};

/// Longest title shown for a history row.
const TITLE_MAX_CHARS: usize = 60;

/// A stored generation as returned by `/history`.
///
/// Every field defaults to empty when the server omits it or sends null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_nullable_string")]
    pub id: String,
    /// Raw wire value; see [`HistoryItem::content_type`].
    #[serde(rename = "type", default, deserialize_with = "deserialize_nullable_string")]
    pub content_type: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub prompt: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub input: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub input_url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub result: String,
    #[serde(default, deserialize_with = "deserialize_url_list")]
    pub result_url: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub updated_at: String,
    #[serde(rename = "__v", default)]
    pub version: i64,
}

impl HistoryItem {
    /// The content type, if the wire value is one we know.
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type.parse().ok()
    }

    /// Label for the row, falling back to the raw wire value.
    pub fn content_type_label(&self) -> String {
        match self.content_type() {
            Some(content_type) => content_type.label().to_string(),
            None if self.content_type.is_empty() => "Content".to_string(),
            None => self.content_type.clone(),
        }
    }

    /// First non-blank line of the prompt, text input or URL, truncated.
    pub fn title(&self) -> String {
        let source = [&self.prompt, &self.input, &self.input_url, &self.url]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty());

        let Some(source) = source else {
            return format!("Untitled {}", self.content_type_label());
        };

        let line = source.lines().next().unwrap_or(source).trim();
        if line.chars().count() > TITLE_MAX_CHARS {
            let truncated: String = line.chars().take(TITLE_MAX_CHARS - 3).collect();
            format!("{}...", truncated.trim_end())
        } else {
            line.to_string()
        }
    }

    /// Creation date as `YYYY-MM-DD`.
    ///
    /// Accepts RFC 3339 timestamps and bare dates; anything else is shown as sent.
    pub fn created_date(&self) -> String {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&self.created_at) {
            return parsed.format("%Y-%m-%d").to_string();
        }
        if let Ok(parsed) = NaiveDate::parse_from_str(&self.created_at, "%Y-%m-%d") {
            return parsed.format("%Y-%m-%d").to_string();
        }
        self.created_at.clone()
    }

    pub fn output(&self) -> Option<GenerationOutput> {
        GenerationOutput::select(Some(&self.result), &self.result_url)
    }
}

/// Body of `DELETE /history/{id}`.
///
/// Servers answer with `{"success": true}`, `{}`, a message or nothing at
/// all. Only an explicit `"success": false` counts as a refusal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: Option<bool>,
}

impl DeleteResponse {
    pub fn confirmed() -> Self {
        Self {
            success: Some(true),
        }
    }

    pub fn rejected() -> Self {
        Self {
            success: Some(false),
        }
    }

    /// Read whatever a 2xx delete returned. Bodies of any other shape count
    /// as an acknowledgement.
    pub fn from_body(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> HistoryItem {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_full_item() {
        let item = item(json!({
            "_id": "abc",
            "type": "smart-summary",
            "prompt": "",
            "input": "Some text",
            "inputUrl": "",
            "url": "",
            "result": "Summary",
            "resultUrl": "",
            "createdAt": "2024-01-15T09:30:00.000Z",
            "updatedAt": "2024-01-15T09:31:00.000Z",
            "__v": 0
        }));

        assert_eq!(item.id, "abc");
        assert_eq!(item.content_type(), Some(ContentType::SmartSummary));
        assert_eq!(item.input, "Some text");
        assert!(item.result_url.is_empty());
        assert_eq!(item.version, 0);
        assert_eq!(item.output(), Some(GenerationOutput::Text("Summary".to_string())));
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let item = item(json!({"_id": "x", "input": null}));
        assert_eq!(item.input, "");
        assert_eq!(item.content_type, "");
        assert_eq!(item.content_type(), None);
        assert_eq!(item.output(), None);
    }

    #[test]
    fn test_title_sources() {
        let mut it = HistoryItem {
            content_type: "key-points".to_string(),
            ..Default::default()
        };
        assert_eq!(it.title(), "Untitled Key Points");

        it.url = "https://example.com/post".to_string();
        assert_eq!(it.title(), "https://example.com/post");

        it.input = "  first line\nsecond line".to_string();
        assert_eq!(it.title(), "first line");

        it.prompt = "x".repeat(100);
        let title = it.title();
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn test_content_type_label_fallbacks() {
        let unknown = HistoryItem {
            content_type: "summary".to_string(),
            ..Default::default()
        };
        assert_eq!(unknown.content_type_label(), "summary");
        assert_eq!(HistoryItem::default().content_type_label(), "Content");
    }

    #[test]
    fn test_created_date() {
        let mut it = HistoryItem {
            created_at: "2024-01-15T23:30:00+00:00".to_string(),
            ..Default::default()
        };
        assert_eq!(it.created_date(), "2024-01-15");

        it.created_at = "2024-01-14".to_string();
        assert_eq!(it.created_date(), "2024-01-14");

        it.created_at = "yesterday".to_string();
        assert_eq!(it.created_date(), "yesterday");
    }

    #[test]
    fn test_delete_response() {
        assert_eq!(
            DeleteResponse::from_body(json!({"success": true})),
            DeleteResponse::confirmed()
        );
        assert!(DeleteResponse::from_body(json!({"success": false})).is_rejected());

        for body in [
            json!({}),
            json!({"message": "deleted"}),
            json!(null),
            json!(""),
            json!({"success": "yes"}),
        ] {
            assert!(!DeleteResponse::from_body(body.clone()).is_rejected(), "{}", body);
        }
    }
}
