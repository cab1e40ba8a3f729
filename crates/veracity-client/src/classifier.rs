//! Classifier trait and the LLM-backed implementation

use crate::parser::ReplyParser;
use crate::prompt::build_prompt;
use crate::provider::TextCompletionProvider;
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;
use veracity_core::{Article, ClassificationResult, Result};

/// Trait for article classifiers
#[async_trait]
pub trait NewsClassifier: Send + Sync {
    /// Classify the given article
    async fn classify(&self, article: &Article) -> Result<ClassificationResult>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// Classifier that asks a text completion provider for a verdict and parses
/// the free-text reply.
///
/// One round trip per call, no internal retry: an unreachable endpoint
/// surfaces as [`veracity_core::Error::InferenceUnavailable`] and the caller
/// decides what to do. An ambiguous reply is not an error; it degrades to
/// `Label::Unknown` with the default confidence.
pub struct LlmClassifier {
    name: String,
    provider: Box<dyn TextCompletionProvider>,
    parser: ReplyParser,
}

impl LlmClassifier {
    /// Create a classifier over the given provider
    pub fn new(provider: Box<dyn TextCompletionProvider>) -> Result<Self> {
        Ok(Self {
            name: "llm".to_string(),
            provider,
            parser: ReplyParser::new()?,
        })
    }
}

#[async_trait]
impl NewsClassifier for LlmClassifier {
    async fn classify(&self, article: &Article) -> Result<ClassificationResult> {
        let start = Instant::now();

        let prompt = build_prompt(article);
        let reply = self.provider.complete(&prompt).await?;

        debug!(
            model = %self.provider.model_name(),
            reply_len = reply.len(),
            "received completion"
        );

        let mut result = self.parser.parse(&reply);
        result.metadata.model = Some(self.provider.model_name().to_string());
        result.latency_us = start.elapsed().as_micros() as u64;
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
