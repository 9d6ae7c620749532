use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content the backend generates.
///
/// Serialized with the kebab-case wire names (`info-graphics`, `key-points`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    InfoGraphics,
    ConceptMap,
    VisualNotes,
    FlashCards,
    #[default]
    KeyPoints,
    SmartSummary,
    MediaCarousels,
    SocialMediaPost,
}

impl ContentType {
    /// Picker order.
    pub const ALL: [ContentType; 8] = [
        ContentType::InfoGraphics,
        ContentType::ConceptMap,
        ContentType::VisualNotes,
        ContentType::FlashCards,
        ContentType::KeyPoints,
        ContentType::SmartSummary,
        ContentType::MediaCarousels,
        ContentType::SocialMediaPost,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::InfoGraphics => "info-graphics",
            ContentType::ConceptMap => "concept-map",
            ContentType::VisualNotes => "visual-notes",
            ContentType::FlashCards => "flash-cards",
            ContentType::KeyPoints => "key-points",
            ContentType::SmartSummary => "smart-summary",
            ContentType::MediaCarousels => "media-carousels",
            ContentType::SocialMediaPost => "social-media-post",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::InfoGraphics => "Infographics",
            ContentType::ConceptMap => "Concept Map",
            ContentType::VisualNotes => "Visual Notes",
            ContentType::FlashCards => "Flash Cards",
            ContentType::KeyPoints => "Key Points",
            ContentType::SmartSummary => "Smart Summary",
            ContentType::MediaCarousels => "Media Carousels",
            ContentType::SocialMediaPost => "Social Media Post",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContentType::InfoGraphics => "Data and ideas laid out as a visual graphic",
            ContentType::ConceptMap => "Concepts linked by their relationships",
            ContentType::VisualNotes => "Sketch-style notes of the main ideas",
            ContentType::FlashCards => "Question and answer cards for review",
            ContentType::KeyPoints => "The essential points as a short list",
            ContentType::SmartSummary => "A condensed summary of the source",
            ContentType::MediaCarousels => "A sequence of slides for sharing",
            ContentType::SocialMediaPost => "A ready-to-publish social post",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Next type in picker order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous type in picker order, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown content type: {}", s))
    }
}

/// How the input reaches the backend. Also the active input tab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Text,
    Url,
    File,
}

impl InputFormat {
    pub const ALL: [InputFormat; 3] = [InputFormat::Text, InputFormat::Url, InputFormat::File];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Text => "text",
            InputFormat::Url => "url",
            InputFormat::File => "file",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            InputFormat::Text => "Text",
            InputFormat::Url => "URL",
            InputFormat::File => "File",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            InputFormat::Text => InputFormat::Url,
            InputFormat::Url => InputFormat::File,
            InputFormat::File => InputFormat::Text,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            InputFormat::Text => InputFormat::File,
            InputFormat::Url => InputFormat::Text,
            InputFormat::File => InputFormat::Url,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(InputFormat::Text),
            "url" => Ok(InputFormat::Url),
            "file" => Ok(InputFormat::File),
            other => Err(format!("Unsupported input format: {}", other)),
        }
    }
}
