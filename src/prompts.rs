//! Prompt templates and rendering.
//!
//! Templates live under `data/prompts/` and are baked into the binary at
//! compile time. All user-visible narrative scaffolding (the model
//! instruction, the no-credential fallback story, the sample-image
//! description) is assembled here.

use crate::models::StorySettings;

pub const STORY_INSTRUCTION: &str = include_str!("../data/prompts/story_instruction.txt");
pub const FALLBACK_STORY: &str = include_str!("../data/prompts/fallback_story.txt");
pub const SAMPLE_DESCRIPTION: &str = include_str!("../data/prompts/sample_description.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Full instruction prompt sent to the model alongside the image part.
pub fn story_instruction(settings: &StorySettings) -> String {
    render(
        STORY_INSTRUCTION,
        &[
            ("genre", &settings.genre.to_string()),
            ("words", &settings.length.word_count().to_string()),
            ("mood", settings.genre.mood()),
        ],
    )
}

/// Deterministic placeholder story used when no credential is configured.
pub fn fallback_story(settings: &StorySettings) -> String {
    render(
        FALLBACK_STORY,
        &[
            ("genre", &settings.genre.to_string()),
            ("words", &settings.length.word_count().to_string()),
        ],
    )
}

/// Text stand-in for a sample image, built from its visual description.
pub fn sample_description(alt_text: &str) -> String {
    render(SAMPLE_DESCRIPTION, &[("alt", alt_text)])
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Length};

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!STORY_INSTRUCTION.is_empty());
        assert!(!FALLBACK_STORY.is_empty());
        assert!(!SAMPLE_DESCRIPTION.is_empty());
    }

    #[test]
    fn test_story_instruction_has_placeholders() {
        assert!(STORY_INSTRUCTION.contains("{{genre}}"));
        assert!(STORY_INSTRUCTION.contains("{{words}}"));
        assert!(STORY_INSTRUCTION.contains("{{mood}}"));
    }

    #[test]
    fn test_story_instruction_embeds_exact_word_count() {
        for (length, words) in [
            (Length::Short, "100"),
            (Length::Medium, "200"),
            (Length::Long, "300"),
        ] {
            let prompt = story_instruction(&StorySettings {
                genre: Genre::Fantasy,
                length,
            });
            assert!(prompt.contains(words), "prompt missing word target {}", words);
        }
    }

    #[test]
    fn test_story_instruction_embeds_genre_and_mood() {
        let prompt = story_instruction(&StorySettings {
            genre: Genre::Horror,
            length: Length::Short,
        });
        assert!(prompt.contains("Horror"));
        assert!(prompt.contains("dread and suspense"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_fallback_story_is_deterministic() {
        let settings = StorySettings {
            genre: Genre::Mystery,
            length: Length::Long,
        };
        assert_eq!(fallback_story(&settings), fallback_story(&settings));
        assert!(fallback_story(&settings).contains("Mystery"));
        assert!(fallback_story(&settings).contains("300"));
    }

    #[test]
    fn test_sample_description_references_alt_text() {
        let description = sample_description("A brooding, gothic castle under a stormy sky.");
        assert!(description.contains("gothic castle"));
        assert!(!description.contains("{{"));
    }
}
