//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Input-shape problems (`InvalidInput`, `Encoding`) are raised to the
//! caller; remote-service failures are converted into displayable story
//! text by the orchestrator and never cross its boundary as errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid image input: {0}")]
    InvalidInput(String),

    #[error("Image encoding error: {0}")]
    Encoding(String),

    #[error("AI provider error: {0}")]
    AiProvider(String),
}

pub type Result<T> = std::result::Result<T, Error>;
