//! Input normalization: [`ImageInput`] to a model-ready [`RequestPart`].
//!
//! Samples short-circuit to a text description and never touch the
//! encoding path; uploads are base64-encoded off the async executor.

use crate::models::{ImageInput, InlineData, RequestPart};
use crate::{prompts, Error, Result};
use base64::Engine as _;

/// Convert a user-selected image into the single request part sent to the
/// model.
///
/// Variant discrimination runs before any byte access, so a sample
/// descriptor can never be fed to the binary encoder by mistake.
pub async fn normalize(input: &ImageInput) -> Result<RequestPart> {
    match input {
        ImageInput::Sample { alt_text } => {
            tracing::debug!("Processing sample image as text description");
            Ok(RequestPart::Text {
                text: prompts::sample_description(alt_text),
            })
        }
        ImageInput::Upload {
            bytes,
            mime_type,
            name,
        } => {
            if bytes.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "Uploaded file '{}' is empty",
                    name
                )));
            }

            let mime = resolve_mime(mime_type.as_deref(), name);
            let data = encode_base64(bytes.clone()).await?;

            Ok(RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: mime,
                    data,
                },
            })
        }
    }
}

/// MIME resolution order: declared type on the upload, then filename
/// extension, then a generic binary fallback.
fn resolve_mime(declared: Option<&str>, name: &str) -> String {
    if let Some(mime) = declared {
        if !mime.is_empty() {
            return mime.to_string();
        }
    }

    let lowered = name.to_ascii_lowercase();
    if lowered.ends_with(".png") {
        "image/png".to_string()
    } else if lowered.ends_with(".gif") {
        "image/gif".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Base64-encode an upload on the blocking pool. Payloads can be multiple
/// megabytes, so the encode is kept off the async executor.
async fn encode_base64(bytes: Vec<u8>) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        base64::engine::general_purpose::STANDARD.encode(&bytes)
    })
    .await
    .map_err(|e| Error::Encoding(format!("Base64 encoding task failed: {}", e)))
}
