use async_trait::async_trait;
use reqwest::Client;
use summora_common::{AppConfig, Result, SummoraError};
use tracing::{debug, info};

use crate::llm_trait::TextGenerator;
use crate::types::{GenerateRequest, GenerateResponse};

/// Gemini API client
///
/// One generateContent exchange per call. No retry, no backoff, no
/// client-side timeout; the caller awaits the single response.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl GeminiClient {
    /// Create new Gemini client
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        let model = model.into();

        info!("Gemini client initialized: {} ({})", base_url, model);

        Self {
            base_url,
            api_key: api_key.into(),
            model,
            client: Client::new(),
        }
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.gemini_base_url,
            &config.gemini_api_key,
            &config.summary_model,
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send one generateContent request and extract the candidate text
    async fn send(&self, request: &GenerateRequest) -> Result<String> {
        debug!(
            "Sending generate request to Gemini - Model: {}, Prompt length: {}",
            self.model,
            request
                .contents
                .first()
                .and_then(|c| c.parts.first())
                .map(|p| p.text.len())
                .unwrap_or(0)
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Gemini API error: {}", e))?;

        let result: GenerateResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse response: {}", e))?;

        match result.text() {
            Some(text) if !text.trim().is_empty() => {
                debug!("Received response from Gemini - Length: {}", text.len());
                Ok(text.to_string())
            }
            _ => Err(SummoraError::EmptyResponse),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest::from_prompt(prompt);
        self.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com",
            "key",
            "gemini-3-flash-preview",
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
