//! AI service integration for story generation.
//!
//! Provides the remote-model seam used by the orchestrator: a real Gemini
//! `generateContent` client and a scripted mock for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiStoryClient;
pub use mock::MockStoryClient;

use crate::models::RequestPart;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Remote model capable of turning an image part plus an instruction
/// prompt into story text.
///
/// Implementations make exactly one attempt per call; retry policy, if
/// any, belongs to callers (the orchestrator makes none).
#[async_trait]
pub trait StoryModelService: Send + Sync {
    async fn generate_story(&self, image_part: RequestPart, instruction: String) -> Result<String>;
}

// Lets tests hand the orchestrator a client they keep a handle to.
#[async_trait]
impl<T: StoryModelService + ?Sized> StoryModelService for Arc<T> {
    async fn generate_story(&self, image_part: RequestPart, instruction: String) -> Result<String> {
        (**self).generate_story(image_part, instruction).await
    }
}
