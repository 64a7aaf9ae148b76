//! Export and share helpers for finished stories.
//!
//! Presentation-adjacent actions: saving a story to a plain-text file
//! named after its genre and a timestamp, and producing the truncated
//! preview used when sharing.

use crate::models::Genre;
use crate::Result;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Maximum share preview length in characters.
const PREVIEW_CHARS: usize = 150;

/// Write the story to `<dir>/AI_Story_<genre>_<millis>.txt` and return
/// the path.
pub fn export_story(dir: &Path, genre: Genre, story: &str) -> Result<PathBuf> {
    let filename = format!("AI_Story_{}_{}.txt", genre, Utc::now().timestamp_millis());
    let path = dir.join(filename);
    fs::write(&path, story)?;
    info!("Exported story to {}", path.display());
    Ok(path)
}

/// Truncated snippet for share targets; appends an ellipsis only when
/// the story was actually cut.
pub fn share_preview(story: &str) -> String {
    if story.chars().count() <= PREVIEW_CHARS {
        return story.to_string();
    }
    let truncated: String = story.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}
