//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use veracity_core::{Error, Result};

/// Environment variable naming the inference endpoint
pub const OLLAMA_URL_ENV: &str = "OLLAMA_URL";
/// Environment variable naming the pulled model
pub const OLLAMA_MODEL_ENV: &str = "OLLAMA_MODEL";

/// Classifier client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Inference endpoint base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name, must already be pulled on the endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature; low for consistent verdicts
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Completion length cap, keeps replies short and fast
    #[serde(default = "default_num_predict")]
    pub num_predict: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist. Environment variables are applied on top.
    pub fn load(config_path: &str) -> Result<Self> {
        let mut config = if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| Error::config(format!("failed to parse {config_path}: {e}")))?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Build configuration from defaults plus `OLLAMA_URL` / `OLLAMA_MODEL`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(OLLAMA_URL_ENV) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(model) = std::env::var(OLLAMA_MODEL_ENV) {
            if !model.is_empty() {
                self.model = model;
            }
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            num_predict: default_num_predict(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

fn default_num_predict() -> u32 {
    150
}

fn default_timeout_secs() -> u64 {
    25
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.num_predict, 150);
        assert_eq!(config.request_timeout_secs, 25);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ClientConfig::load("/nonexistent/veracity.yaml").unwrap();
        assert_eq!(config.model, ClientConfig::default().model);
    }

    #[test]
    fn test_load_yaml_with_partial_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model: mistral").unwrap();
        writeln!(file, "request_timeout_secs: 60").unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.model, "mistral");
        assert_eq!(config.request_timeout_secs, 60);
        // Unspecified fields keep their defaults
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.num_predict, 150);
    }

    #[test]
    fn test_load_malformed_yaml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model: [unclosed").unwrap();

        let err = ClientConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, veracity_core::Error::Config(_)));
    }
}
