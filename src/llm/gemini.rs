//! Gemini client implementation
//!
//! Async HTTP client for the Gemini generateContent API. Best-effort only:
//! the composer recovers locally from any failure here.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::core::{GeminiConfig, ProspectError, Result};

/// Seam for the external text-generation service
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Submit a prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Gemini API client
#[derive(Clone, Debug)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// Fails when no API key is configured; the key comes from the
    /// GEMINI_API_KEY environment variable and is never stored in source
    /// or written to the config file.
    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ProspectError::config("GEMINI_API_KEY not set"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProspectError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// Override the API base URL (used by tests against a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ProspectError::generation(format!(
                "Gemini API returned {}: {}",
                status, detail
            )));
        }

        let response_json: serde_json::Value = response.json().await?;

        let text = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| ProspectError::generation("malformed Gemini response"))?
            .trim()
            .to_string();

        if text.is_empty() {
            return Err(ProspectError::generation("Gemini returned empty text"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let config = GeminiConfig {
            api_key: None,
            model: "gemini-1.5-flash".into(),
            timeout_secs: 5,
        };
        let err = GeminiClient::from_config(&config).unwrap_err();
        assert!(matches!(err, ProspectError::Config(_)));
    }

    #[test]
    fn test_client_builds_with_key() {
        let config = GeminiConfig {
            api_key: Some("test-key".into()),
            model: "gemini-1.5-flash".into(),
            timeout_secs: 5,
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.model, "gemini-1.5-flash");
    }
}
