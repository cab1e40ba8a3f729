//! Core types for Veracity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A news article submitted for classification.
///
/// Transient: constructed per call, never persisted. The title may be
/// empty; content is expected non-empty but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Headline of the article
    pub title: String,

    /// Full text content
    pub content: String,
}

impl Article {
    /// Create a new article
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Classification verdict for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The article reads as fabricated or misleading
    Fake,
    /// The article reads as legitimate reporting
    Real,
    /// The reply named both verdicts, or neither
    Unknown,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fake => write!(f, "fake"),
            Self::Real => write!(f, "real"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of classifying one article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Classification verdict
    pub label: Label,

    /// Confidence score, always in [0, 1]
    pub confidence: f32,

    /// Additional metadata
    #[serde(default)]
    pub metadata: ClassificationMetadata,

    /// Latency in microseconds
    #[serde(default)]
    pub latency_us: u64,
}

impl ClassificationResult {
    /// Create a new classification result. Confidence is clamped to [0, 1].
    pub fn new(label: Label, confidence: f32) -> Self {
        Self {
            label,
            confidence: confidence.clamp(0.0, 1.0),
            metadata: ClassificationMetadata::default(),
            latency_us: 0,
        }
    }

    /// Check if confidence exceeds threshold
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }
}

/// Metadata about a classification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationMetadata {
    /// Model name that produced the verdict
    pub model: Option<String>,

    /// Verdict keyword matched in the reply, if any
    pub matched_keyword: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_clamps_confidence() {
        assert_eq!(ClassificationResult::new(Label::Fake, 1.5).confidence, 1.0);
        assert_eq!(ClassificationResult::new(Label::Real, -0.2).confidence, 0.0);
        assert_eq!(ClassificationResult::new(Label::Real, 0.85).confidence, 0.85);
    }

    #[test]
    fn test_exceeds_threshold() {
        let result = ClassificationResult::new(Label::Fake, 0.9);
        assert!(result.exceeds_threshold(0.8));
        assert!(!result.exceeds_threshold(0.95));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Fake.to_string(), "fake");
        assert_eq!(Label::Real.to_string(), "real");
        assert_eq!(Label::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_label_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"fake\"");
        let label: Label = serde_json::from_str("\"unknown\"").unwrap();
        assert_eq!(label, Label::Unknown);
    }
}
