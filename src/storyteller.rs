//! Story generation orchestration.
//!
//! Owns one request lifecycle: normalize the image input, assemble the
//! instruction prompt, dispatch a single model request, and map every
//! outcome into displayable story text. Remote failures never surface as
//! errors; only input-shape problems do.

use crate::ai::{GeminiStoryClient, StoryModelService};
use crate::models::{Config, ImageInput, StoryResult, StorySettings, StorySource};
use crate::{input, prompts, Result};
use tracing::{error, info};

/// Longest slice of a remote error message embedded in the user-facing
/// report.
const ERROR_PREVIEW_CHARS: usize = 150;

/// Coordinates input normalization, prompt assembly, and model dispatch.
///
/// Holds the remote client explicitly instead of a process-wide handle,
/// so tests can substitute the model without touching global state. A
/// missing credential leaves the client unset and routes every call to
/// the deterministic fallback story.
pub struct Storyteller {
    model: Option<Box<dyn StoryModelService>>,
}

impl Storyteller {
    /// Build from configuration; no credential means fallback mode.
    pub fn new(config: &Config) -> Self {
        match &config.gemini_api_key {
            Some(api_key) => {
                info!("Story provider: Gemini (model: {})", config.model);
                let mut client = GeminiStoryClient::new(api_key.clone(), config.model.clone());
                if let Some(base_url) = &config.base_url {
                    client = client.with_base_url(base_url.clone());
                }
                Self::with_service(Box::new(client))
            }
            None => {
                info!("No API key configured; serving fallback stories");
                Self::fallback_only()
            }
        }
    }

    /// Build from an explicit model service (tests, harnesses).
    pub fn with_service(model: Box<dyn StoryModelService>) -> Self {
        Self { model: Some(model) }
    }

    /// Build an orchestrator with no remote client at all.
    pub fn fallback_only() -> Self {
        Self { model: None }
    }

    /// Generate one story. Resolves with displayable text for every
    /// remote outcome; returns `Err` only for invalid input or a failed
    /// upload encoding.
    pub async fn generate(
        &self,
        image: &ImageInput,
        settings: &StorySettings,
    ) -> Result<StoryResult> {
        let model = match &self.model {
            Some(model) => model,
            None => {
                info!("Returning fallback story for genre {}", settings.genre);
                return Ok(StoryResult {
                    text: prompts::fallback_story(settings),
                    source: StorySource::Fallback,
                });
            }
        };

        let image_part = input::normalize(image).await?;
        let instruction = prompts::story_instruction(settings);

        match model.generate_story(image_part, instruction).await {
            Ok(text) => Ok(StoryResult {
                text: text.trim().to_string(),
                source: StorySource::Model,
            }),
            Err(e) => {
                error!("Story generation failed: {}", e);
                Ok(StoryResult {
                    text: error_report(&e.to_string()),
                    source: StorySource::ErrorReport,
                })
            }
        }
    }
}

/// User-facing rendering of a remote failure, truncated so a huge
/// provider payload cannot flood the story panel.
fn error_report(detail: &str) -> String {
    let truncated: String = detail.chars().take(ERROR_PREVIEW_CHARS).collect();
    format!(
        "An error occurred while generating the story: {}... (See logs for details)",
        truncated
    )
}
