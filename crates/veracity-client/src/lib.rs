//! Veracity Client
//!
//! Fake news classification over a locally hosted Ollama endpoint.
//!
//! The flow is a single round trip: build a prompt from the article, submit
//! it to the configured inference endpoint, and parse the free-text reply
//! into a verdict (`fake` / `real` / `unknown`) with a confidence in [0, 1].
//!
//! The endpoint sits behind the [`TextCompletionProvider`] trait so tests
//! can substitute canned completions; [`HeuristicClassifier`] offers an
//! offline lexicon fallback the caller can opt into when the endpoint is
//! down.

pub mod classifier;
pub mod config;
pub mod heuristic;
pub mod ollama;
pub mod parser;
pub mod prompt;
pub mod provider;

pub use classifier::{LlmClassifier, NewsClassifier};
pub use config::ClientConfig;
pub use heuristic::HeuristicClassifier;
pub use ollama::OllamaProvider;
pub use parser::{ReplyParser, DEFAULT_CONFIDENCE};
pub use prompt::build_prompt;
pub use provider::TextCompletionProvider;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{LlmClassifier, NewsClassifier};
    pub use crate::config::ClientConfig;
    pub use crate::heuristic::HeuristicClassifier;
    pub use crate::ollama::OllamaProvider;
    pub use crate::provider::TextCompletionProvider;
    pub use veracity_core::prelude::*;
}
