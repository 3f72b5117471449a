//! Client for the downstream text-generation service.
//!
//! Sends a single `POST {base_url}/generate` per chat message with fixed
//! sampling parameters. No retries or backoff; the caller maps each failure
//! kind to a response status.

use crate::config::GenerationConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Sampling parameters are constants of the relay, never derived from input.
const MAX_NEW_TOKENS: u32 = 512;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;

/// Error type for generation requests.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("FastAPI request failed: {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("No response content from generation service")]
    EmptyResponse,

    #[error("Generation request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

pub struct GenerationClient {
    base_url: String,
    client: Client,
}

impl GenerationClient {
    pub fn new(config: &GenerationConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Forward a prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateRequest {
            prompt,
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            do_sample: true,
        };

        let url = format!("{}/generate", self.base_url);

        tracing::debug!(
            url = %url,
            prompt_len = prompt.len(),
            "Sending request to generation service"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let api_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Network(format!("Failed to parse response: {}", e)))?;

        match api_response.generated_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(GenerationError::EmptyResponse),
        }
    }
}

// ============================================================================
// Generation API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generated_text: Option<String>,
}
