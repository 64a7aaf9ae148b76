//! Art-to-story generator - turns an artwork image into a short prose story
//!
//! Normalizes an uploaded image or a preset sample into a model request,
//! assembles a genre/length-parameterized prompt, dispatches one Gemini
//! request, and maps every outcome (success, missing credential, remote
//! failure) into displayable story text.

pub mod ai;
pub mod app;
pub mod error;
pub mod export;
pub mod input;
pub mod lifecycle;
pub mod models;
pub mod prompts;
pub mod storyteller;

pub use error::{Error, Result};
