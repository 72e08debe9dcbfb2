use crate::constants::{API_BASE_VAR, API_KEY_VAR, DEFAULT_MODEL, GEMINI_API_BASE, MODEL_VAR};
use crate::error::ProfileError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl Config {
    /// Reads the API key (required), model and API base from the environment.
    pub fn from_env() -> Result<Self, ProfileError> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ProfileError::MissingApiKey)?;

        Ok(Self {
            api_key,
            model: env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var(API_BASE_VAR).unwrap_or_else(|_| GEMINI_API_BASE.to_string()),
        })
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
