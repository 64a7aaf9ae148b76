//! Data models and structures
//!
//! Defines the image input union, story settings, the generated story
//! result, the Gemini request part wire format, and app configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image chosen by the user: either raw uploaded bytes or one of the
/// pre-defined sample artworks, which carry only a visual description.
///
/// The two variants are mutually exclusive by construction, so the
/// pipeline never has to probe an ambiguous object shape to tell an
/// upload apart from a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageInput {
    Upload {
        bytes: Vec<u8>,
        /// MIME type as declared by the upload widget, if any.
        mime_type: Option<String>,
        /// Original filename, used for extension-based MIME inference.
        name: String,
    },
    Sample {
        alt_text: String,
    },
}

impl ImageInput {
    /// Short human-readable label for logging and display.
    pub fn label(&self) -> &str {
        match self {
            ImageInput::Upload { name, .. } => name,
            ImageInput::Sample { alt_text } => alt_text,
        }
    }
}

/// Story genre options, mirroring the fixed set offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Genre {
    #[default]
    Fantasy,
    Mystery,
    Horror,
    Scifi,
    Adventure,
}

impl Genre {
    /// Mood directive embedded in the story prompt for this genre.
    pub fn mood(&self) -> &'static str {
        match self {
            Genre::Horror => "dread and suspense",
            Genre::Mystery => "intrigue and tension",
            Genre::Scifi => "wonder and technological isolation",
            Genre::Fantasy | Genre::Adventure => "epic wonder and deep history",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Genre::Fantasy => "Fantasy",
            Genre::Mystery => "Mystery",
            Genre::Horror => "Horror",
            Genre::Scifi => "Scifi",
            Genre::Adventure => "Adventure",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "fantasy" => Ok(Genre::Fantasy),
            "mystery" => Ok(Genre::Mystery),
            "horror" => Ok(Genre::Horror),
            "scifi" => Ok(Genre::Scifi),
            "adventure" => Ok(Genre::Adventure),
            _ => Err(format!(
                "Unknown genre '{}'. Expected one of: fantasy, mystery, horror, scifi, adventure",
                input
            )),
        }
    }
}

/// Target story length. Each option maps to a fixed word target that is
/// interpolated verbatim into the prompt and the fallback story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn word_count(&self) -> u32 {
        match self {
            Length::Short => 100,
            Length::Medium => 200,
            Length::Long => 300,
        }
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "short" => Ok(Length::Short),
            "medium" => Ok(Length::Medium),
            "long" => Ok(Length::Long),
            _ => Err(format!(
                "Unknown length '{}'. Expected one of: short, medium, long",
                input
            )),
        }
    }
}

/// Narrative parameters selected by the user. Both fields have valid
/// defaults, so an unset selector never reaches the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorySettings {
    pub genre: Genre,
    pub length: Length,
}

/// Where the text of a [`StoryResult`] came from.
///
/// The UI renders all three uniformly; the distinction exists so tests
/// and callers can tell a real story from a degraded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySource {
    /// Genuine model output.
    Model,
    /// Deterministic placeholder returned when no credential is configured.
    Fallback,
    /// User-facing description of a remote-service failure.
    ErrorReport,
}

/// One finished generation. Created fresh per invocation and never
/// mutated; superseded wholesale by the next invocation's result.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryResult {
    pub text: String,
    pub source: StorySource,
}

impl StoryResult {
    pub fn is_fallback(&self) -> bool {
        self.source == StorySource::Fallback
    }
}

/// Normalized, model-ready form of an [`ImageInput`]: either inline
/// base64 image data or a plain-text description. Serializes to the
/// Gemini `Part` wire shape.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestPart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload used for image/vision requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Absence is a supported configuration: generation degrades to the
    /// deterministic fallback story instead of failing at startup.
    pub gemini_api_key: Option<String>,
    pub model: String,
    /// Override for the Gemini endpoint, mainly for local testing.
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if gemini_api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set. Stories will use sample text.");
        }

        Self {
            gemini_api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            base_url: std::env::var("GEMINI_BASE_URL").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_word_counts() {
        assert_eq!(Length::Short.word_count(), 100);
        assert_eq!(Length::Medium.word_count(), 200);
        assert_eq!(Length::Long.word_count(), 300);
    }

    #[test]
    fn test_genre_moods() {
        assert_eq!(Genre::Horror.mood(), "dread and suspense");
        assert_eq!(Genre::Mystery.mood(), "intrigue and tension");
        assert_eq!(Genre::Scifi.mood(), "wonder and technological isolation");
        assert_eq!(Genre::Fantasy.mood(), "epic wonder and deep history");
        assert_eq!(Genre::Adventure.mood(), "epic wonder and deep history");
    }

    #[test]
    fn test_genre_round_trips_through_str() {
        for genre in [
            Genre::Fantasy,
            Genre::Mystery,
            Genre::Horror,
            Genre::Scifi,
            Genre::Adventure,
        ] {
            let parsed: Genre = genre.to_string().parse().unwrap();
            assert_eq!(parsed, genre);
        }
    }

    #[test]
    fn test_genre_rejects_unknown() {
        let err = "western".parse::<Genre>().unwrap_err();
        assert!(err.contains("western"));
    }

    #[test]
    fn test_default_settings() {
        let settings = StorySettings::default();
        assert_eq!(settings.genre, Genre::Fantasy);
        assert_eq!(settings.length, Length::Medium);
    }

    #[test]
    fn test_request_part_wire_format() {
        let part = RequestPart::InlineData {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        };

        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"inlineData\""));
        assert!(json.contains("\"mimeType\":\"image/png\""));

        let text = RequestPart::Text {
            text: "a description".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&text).unwrap(),
            "{\"text\":\"a description\"}"
        );
    }
}
