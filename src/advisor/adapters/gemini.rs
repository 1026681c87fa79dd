//! Gemini HTTP adapter for the generative backend port.

use crate::advisor::ports::{GenerativeBackend, GenerativeBackendError, GenerativeBackendResult};
use crate::config::AdvisorConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

/// Generative backend speaking the Gemini `generateContent` HTTP API.
///
/// Every request asks for a JSON response and carries the configured
/// timeout. No retries: a failed exchange surfaces as a single transport
/// error for the caller to absorb.
#[derive(Debug, Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiBackend {
    /// Creates a backend from advisor configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerativeBackendError::Transport`] when the HTTP client
    /// cannot be constructed.
    pub fn new(config: &AdvisorConfig) -> GenerativeBackendResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GenerativeBackendError::transport)?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
        })
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn generate_json(&self, prompt: &str) -> GenerativeBackendResult<Value> {
        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {"responseMimeType": "application/json"},
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(GenerativeBackendError::transport)?;

        let payload: Value = response
            .json()
            .await
            .map_err(GenerativeBackendError::transport)?;
        let text = candidate_text(&payload).ok_or_else(|| {
            GenerativeBackendError::MalformedResponse(
                "response carries no candidate text".to_owned(),
            )
        })?;

        serde_json::from_str(text)
            .map_err(|err| GenerativeBackendError::MalformedResponse(err.to_string()))
    }
}

/// Extracts the first candidate's text part from a `generateContent` reply.
fn candidate_text(payload: &Value) -> Option<&str> {
    payload
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
