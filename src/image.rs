use crate::error::ProfileError;
use mime_guess::mime;
use std::path::Path;

/// An image held in memory as a base64 data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    url: String,
    mime_type: String,
}

impl ImageData {
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self::from_base64(&base64::encode(bytes), mime_type)
    }

    pub fn from_base64(data: &str, mime_type: &str) -> Self {
        Self {
            url: format!("data:{};base64,{}", mime_type, data),
            mime_type: mime_type.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The base64 payload with the `data:...,` prefix removed.
    pub fn base64_payload(&self) -> &str {
        match self.url.split_once(',') {
            Some((_, data)) => data,
            None => &self.url,
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::decode(self.base64_payload())
    }
}

/// Reads an image file into a data URL, typing it by extension.
pub async fn read_image(path: &Path) -> Result<ImageData, ProfileError> {
    let guessed = mime_guess::from_path(path).first();
    let mime_type = match guessed {
        Some(m) if m.type_() == mime::IMAGE => m.essence_str().to_string(),
        other => {
            return Err(ProfileError::UnsupportedType {
                path: path.to_path_buf(),
                detected: other.map_or_else(|| "unknown".to_string(), |m| m.to_string()),
            })
        }
    };

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ProfileError::Upload {
            path: path.to_path_buf(),
            source,
        })?;

    log::debug!("read {} ({}, {} bytes)", path.display(), mime_type, bytes.len());
    Ok(ImageData::from_bytes(&bytes, &mime_type))
}
