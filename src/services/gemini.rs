// src/services/gemini.rs
//! Client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GeminiConfig;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    NotConfigured,

    #[error("request to Gemini failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Gemini returned status {0}")]
    Status(StatusCode),

    #[error("failed to decode Gemini response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Gemini response has no candidate text")]
    MissingText,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 512,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> reqwest::Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Build a client whose calls give up after `timeout` in total.
    pub fn with_timeout(config: GeminiConfig, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            config,
            generation: GenerationConfig::default(),
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Send `prompt` as a single-turn request and return the first candidate's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        if !self.config.is_configured() {
            return Err(GeminiError::NotConfigured);
        }

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: &self.generation,
        };

        tracing::debug!(prompt_len = prompt.len(), "Calling Gemini API");

        let response = self
            .client
            .post(&self.config.api_url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::Request(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %error_text, "Gemini API returned an error");
            return Err(GeminiError::Status(status));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.without_url()))?;

        parsed.into_text().ok_or(GeminiError::MissingText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_uses_wire_field_names() {
        let generation = GenerationConfig::default();
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hi" }],
            }],
            generation_config: &generation,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["topK"], 40);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 512);
        assert!(value["generationConfig"]["topP"].as_f64().unwrap() > 0.94);
    }

    #[test]
    fn extracts_first_candidate_text() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
                {"content": {"parts": [{"text": "other"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("first"));
    }

    #[test]
    fn missing_pieces_yield_no_text() {
        let shapes = [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{"finishReason": "SAFETY"}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}),
        ];
        for shape in shapes {
            let parsed: GenerateContentResponse = serde_json::from_value(shape).unwrap();
            assert!(parsed.into_text().is_none());
        }
    }
}
