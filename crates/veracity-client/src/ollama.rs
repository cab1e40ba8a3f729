//! Ollama completion provider
//!
//! Talks to a locally running Ollama instance over its native generate
//! endpoint:
//! ```text
//! POST {base_url}/api/generate
//! {"model":"llama3.2","prompt":"...","stream":false,"options":{...}}
//! ```
//! The non-streaming reply is a single JSON object whose `response` field
//! carries the generated text.

use crate::config::ClientConfig;
use crate::provider::TextCompletionProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use veracity_core::{Error, Result};

/// Strip trailing slashes so path joining stays predictable
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Ollama API client (local endpoint, no auth)
pub struct OllamaProvider {
    base_url: String,
    model: String,
    temperature: f32,
    num_predict: u32,
    client: reqwest::Client,
}

impl OllamaProvider {
    /// Create a provider from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::classifier(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: normalize_base_url(&config.base_url),
            model: config.model.clone(),
            temperature: config.temperature,
            num_predict: config.num_predict,
            client,
        })
    }

    /// The normalized endpoint base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TextCompletionProvider for OllamaProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.num_predict,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::inference_unavailable(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Error::inference_unavailable(format!(
                "{url} returned {status}: {error_body}"
            )));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::inference_unavailable(format!("malformed reply from {url}: {e}")))?;

        Ok(reply.response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

// =============================================================================
// Ollama wire structures
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OllamaProvider::new(&ClientConfig::default()).unwrap();
        assert_eq!(provider.model_name(), "llama3.2");
        assert_eq!(provider.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_url_normalization() {
        let config = ClientConfig {
            base_url: "http://localhost:11434///".to_string(),
            ..ClientConfig::default()
        };
        let provider = OllamaProvider::new(&config).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:11434");
    }

    #[test]
    fn test_generate_request_shape() {
        let request = GenerateRequest {
            model: "llama3.2",
            prompt: "hello",
            stream: false,
            options: GenerateOptions {
                temperature: 0.1,
                num_predict: 150,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3.2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 150);
    }

    #[test]
    fn test_generate_response_tolerates_extra_fields() {
        let json = r#"{"model":"llama3.2","created_at":"2024-01-01T00:00:00Z","response":"VERDICT: REAL","done":true}"#;
        let reply: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "VERDICT: REAL");
    }

    #[tokio::test]
    async fn test_connection_refused_is_inference_unavailable() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 1,
            ..ClientConfig::default()
        };
        let provider = OllamaProvider::new(&config).unwrap();

        let err = provider.complete("hello").await.unwrap_err();
        assert!(err.is_inference_unavailable(), "got: {err}");
    }
}
