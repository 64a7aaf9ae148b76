//! Application wiring: drives the story panel lifecycle around one
//! orchestrator invocation and handles the optional export step.

use crate::lifecycle::StoryPanel;
use crate::models::{Config, ImageInput, StoryResult, StorySettings};
use crate::storyteller::Storyteller;
use crate::{export, Result};
use std::path::PathBuf;
use tracing::info;

pub struct App {
    storyteller: Storyteller,
    panel: StoryPanel,
    export_dir: Option<PathBuf>,
}

impl App {
    /// Construct from environment configuration.
    pub fn new(export_dir: Option<PathBuf>) -> Self {
        let config = Config::from_env();
        Self::with_storyteller(Storyteller::new(&config), export_dir)
    }

    /// Construct from an explicit orchestrator (tests, harnesses).
    pub fn with_storyteller(storyteller: Storyteller, export_dir: Option<PathBuf>) -> Self {
        Self {
            storyteller,
            panel: StoryPanel::new(),
            export_dir,
        }
    }

    /// Current panel contents, for rendering.
    pub fn story(&self) -> Option<&StoryResult> {
        self.panel.story()
    }

    /// Run one generation: begin the panel lifecycle, settle it with the
    /// result, and export if a directory was configured.
    pub async fn run(&mut self, image: ImageInput, settings: StorySettings) -> Result<StoryResult> {
        info!(
            "Generating {} story ({} words) from '{}'",
            settings.genre,
            settings.length.word_count(),
            image.label()
        );

        self.panel.begin();
        let result = self.storyteller.generate(&image, &settings).await?;
        self.panel.settle(result.clone());

        if let Some(dir) = &self.export_dir {
            export::export_story(dir, settings.genre, &result.text)?;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockStoryClient;
    use crate::models::{Genre, Length, StorySource};

    fn sample() -> ImageInput {
        ImageInput::Sample {
            alt_text: "An enchanted forest with glowing plants.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_settles_panel_with_result() {
        let storyteller = Storyteller::with_service(Box::new(
            MockStoryClient::new().with_story_response("The forest remembered.".to_string()),
        ));
        let mut app = App::with_storyteller(storyteller, None);

        assert!(app.story().is_none());
        let result = app.run(sample(), StorySettings::default()).await.unwrap();

        assert_eq!(result.text, "The forest remembered.");
        assert_eq!(app.story().unwrap().text, "The forest remembered.");
    }

    #[tokio::test]
    async fn test_run_exports_when_dir_configured() {
        let dir = tempfile::tempdir().unwrap();
        let storyteller = Storyteller::fallback_only();
        let mut app = App::with_storyteller(storyteller, Some(dir.path().to_path_buf()));

        let settings = StorySettings {
            genre: Genre::Scifi,
            length: Length::Short,
        };
        let result = app.run(sample(), settings).await.unwrap();
        assert_eq!(result.source, StorySource::Fallback);

        let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(exported.len(), 1);
        let name = exported[0].as_ref().unwrap().file_name();
        assert!(name.to_string_lossy().starts_with("AI_Story_Scifi_"));
    }
}
