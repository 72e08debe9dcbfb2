use crate::config::Config;
use crate::constants::API_KEY_HEADER;
use crate::error::GenerationError;
use crate::image::ImageData;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GeminiRequestBody {
    pub contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiRequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GeminiRequestPart {
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct GeminiApiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponsePart {
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

pub fn build_headers(config: &Config) -> Result<HeaderMap, GenerationError> {
    let mut headers = HeaderMap::new();
    headers.insert(API_KEY_HEADER, HeaderValue::from_str(&config.api_key)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Inline image first, then the prompt.
pub fn build_edit_request(base: &ImageData, prompt: &str) -> GeminiRequestBody {
    GeminiRequestBody {
        contents: vec![GeminiContent {
            parts: vec![
                GeminiRequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: base.mime_type().to_string(),
                        data: base.base64_payload().to_string(),
                    },
                },
                GeminiRequestPart::Text {
                    text: prompt.to_string(),
                },
            ],
        }],
    }
}

/// Picks the first inline image part of the first candidate.
pub fn extract_image(response: GeminiApiResponse) -> Result<ImageData, GenerationError> {
    let parts = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts)
        .unwrap_or_default();

    if let Some(inline) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        return Ok(ImageData::from_base64(&inline.data, &inline.mime_type));
    }
    if let Some(text) = parts.iter().find_map(|part| part.text.as_deref()) {
        log::info!("model answered without an image: {}", text);
    }
    Err(GenerationError::NoImage)
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ => body.trim().to_string(),
    }
}

pub async fn edit_image(
    client: &Client,
    config: &Config,
    base: &ImageData,
    prompt: &str,
) -> Result<ImageData, GenerationError> {
    let headers = build_headers(config)?;
    let request_body = build_edit_request(base, prompt);
    let url = config.generate_content_url();
    log::debug!(
        "POST {} ({}, {} base64 chars, prompt {} chars)",
        url,
        base.mime_type(),
        base.base64_payload().len(),
        prompt.len()
    );

    let response = client
        .post(&url)
        .headers(headers)
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("failed to read error body: {}", e);
                String::new()
            }
        };
        log::warn!("generateContent failed with status code: {}", status);
        return Err(GenerationError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        });
    }

    let api_response = response.json::<GeminiApiResponse>().await?;
    extract_image(api_response)
}
