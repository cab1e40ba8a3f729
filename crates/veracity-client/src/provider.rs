//! Text completion provider trait

use async_trait::async_trait;
use veracity_core::Result;

/// Capability interface over a text completion backend.
///
/// The classifier only needs "prompt in, text out"; keeping the seam this
/// narrow lets tests substitute canned completions for the real endpoint.
#[async_trait]
pub trait TextCompletionProvider: Send + Sync {
    /// Submit a prompt and return the generated text.
    ///
    /// Transport failures and non-success statuses surface as
    /// [`veracity_core::Error::InferenceUnavailable`].
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Name of the model serving completions
    fn model_name(&self) -> &str;
}
