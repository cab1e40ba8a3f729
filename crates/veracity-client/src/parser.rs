//! Free-text reply parsing
//!
//! Turns whatever prose the model produced into a verdict and a confidence
//! score. Parsing never fails: an ambiguous reply degrades to
//! `Label::Unknown` with the default confidence.

use regex::Regex;
use tracing::debug;
use veracity_core::{ClassificationResult, Error, Label, Result};

/// Confidence reported when the reply carries no numeric token
pub const DEFAULT_CONFIDENCE: f32 = 0.5;

/// Parser for model replies.
///
/// Verdict rule: case-insensitive substring scan for `fake` and `real`;
/// exactly one present wins, both or neither yields `Unknown`.
///
/// Confidence rule: the first numeric token at or after the verdict
/// keyword; failing that, the first numeric token anywhere in the reply;
/// failing that, [`DEFAULT_CONFIDENCE`]. A `%` suffix or a bare value
/// greater than 1 is read as a percentage. Output is clamped to [0, 1].
pub struct ReplyParser {
    number: Regex,
}

impl ReplyParser {
    pub fn new() -> Result<Self> {
        let number = Regex::new(r"(\d+(?:\.\d+)?)\s*(%)?")
            .map_err(|e| Error::classifier(format!("failed to build number pattern: {e}")))?;
        Ok(Self { number })
    }

    /// Parse one reply into a classification result. Never fails.
    pub fn parse(&self, reply: &str) -> ClassificationResult {
        let lower = reply.to_lowercase();

        let fake_at = lower.find("fake");
        let real_at = lower.find("real");

        let (label, anchor) = match (fake_at, real_at) {
            (Some(at), None) => (Label::Fake, at),
            (None, Some(at)) => (Label::Real, at),
            (Some(_), Some(_)) => {
                debug!("reply names both verdicts, resolving to unknown");
                (Label::Unknown, 0)
            }
            (None, None) => {
                debug!("reply names no verdict, resolving to unknown");
                (Label::Unknown, 0)
            }
        };

        let confidence = self
            .extract_confidence(&lower[anchor..])
            .or_else(|| self.extract_confidence(&lower))
            .unwrap_or(DEFAULT_CONFIDENCE);

        let mut result = ClassificationResult::new(label, confidence);
        result.metadata.matched_keyword = match label {
            Label::Fake => Some("fake".to_string()),
            Label::Real => Some("real".to_string()),
            Label::Unknown => None,
        };
        result
    }

    /// First numeric token in `text`, normalized to [0, 1]
    fn extract_confidence(&self, text: &str) -> Option<f32> {
        let captures = self.number.captures(text)?;
        let value: f32 = captures.get(1)?.as_str().parse().ok()?;

        // "85%" and bare "85" both mean 85 percent; "0.85" is already a ratio
        let ratio = if captures.get(2).is_some() || value > 1.0 {
            value / 100.0
        } else {
            value
        };
        Some(ratio.clamp(0.0, 1.0))
    }
}
