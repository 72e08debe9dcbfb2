use crate::constants::{FALLBACK_ERROR_MESSAGE, NO_IMAGE_MESSAGE};
use std::path::PathBuf;

/// A failed round-trip to the image model.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{}", NO_IMAGE_MESSAGE)]
    NoImage,

    #[error("invalid API key header: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl GenerationError {
    /// Text shown to the user after a failed generation.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("failed to read {}: {source}", .path.display())]
    Upload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not an image (detected {detected})", .path.display())]
    UnsupportedType { path: PathBuf, detected: String },

    #[error("no generated image to download")]
    NothingToDownload,

    #[error("generated image is not valid base64: {0}")]
    InvalidImageData(#[from] base64::DecodeError),

    #[error("failed to save {}: {source}", .path.display())]
    Download {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}
