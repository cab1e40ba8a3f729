//! Offline sensationalism heuristic
//!
//! A lexicon classifier for when no inference endpoint is reachable. Counts
//! distinct sensationalist markers in the title and content; two or more
//! reads as fabricated. Deliberately crude, and only used when the caller
//! asks for it.

use crate::classifier::NewsClassifier;
use aho_corasick::AhoCorasick;
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::Instant;
use veracity_core::{Article, ClassificationResult, Error, Label, Result};

const SENSATIONAL_KEYWORDS: [&str; 5] =
    ["shocking", "unbelievable", "miracle", "secret", "conspiracy"];

/// Minimum distinct keyword hits to call an article fake
const FAKE_THRESHOLD: usize = 2;

pub struct HeuristicClassifier {
    name: String,
    keywords: AhoCorasick,
}

impl HeuristicClassifier {
    pub fn new() -> Result<Self> {
        let keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(SENSATIONAL_KEYWORDS)
            .map_err(|e| Error::classifier(format!("failed to build keyword matcher: {e}")))?;

        Ok(Self {
            name: "heuristic".to_string(),
            keywords,
        })
    }
}

#[async_trait]
impl NewsClassifier for HeuristicClassifier {
    async fn classify(&self, article: &Article) -> Result<ClassificationResult> {
        let start = Instant::now();

        let text = format!("{} {}", article.title, article.content);
        let distinct_hits: HashSet<_> = self
            .keywords
            .find_iter(&text)
            .map(|m| m.pattern())
            .collect();
        let hits = distinct_hits.len();

        let label = if hits >= FAKE_THRESHOLD {
            Label::Fake
        } else {
            Label::Real
        };
        let confidence = (0.5 + 0.1 * hits as f32).min(0.9);

        let mut result = ClassificationResult::new(label, confidence);
        result.metadata.model = Some("sensationalism-lexicon".to_string());
        result.latency_us = start.elapsed().as_micros() as u64;
        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sensational_article_is_fake() {
        let classifier = HeuristicClassifier::new().unwrap();
        let article = Article::new(
            "SHOCKING: Scientists Discover Miracle Cure They Don't Want You To Know!",
            "In an unbelievable revelation, a secret group of researchers has discovered \
             a miracle cure for all diseases. The conspiracy to hide this from the public \
             has been exposed.",
        );

        let result = classifier.classify(&article).await.unwrap();
        assert_eq!(result.label, Label::Fake);
        assert!(result.confidence > 0.5);
        assert!(result.confidence <= 0.9);
    }

    #[tokio::test]
    async fn test_sober_article_is_real() {
        let classifier = HeuristicClassifier::new().unwrap();
        let article = Article::new(
            "Federal Reserve Announces Interest Rate Decision",
            "The Federal Reserve announced today that it will maintain current interest \
             rates, citing stable inflation data. Markets responded with modest gains.",
        );

        let result = classifier.classify(&article).await.unwrap();
        assert_eq!(result.label, Label::Real);
        assert_eq!(result.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_repeated_keyword_counts_once() {
        let classifier = HeuristicClassifier::new().unwrap();
        let article = Article::new("", "shocking shocking shocking");

        let result = classifier.classify(&article).await.unwrap();
        assert_eq!(result.label, Label::Real);
        assert!((result.confidence - 0.6).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_confidence_capped() {
        let classifier = HeuristicClassifier::new().unwrap();
        let article = Article::new(
            "shocking unbelievable miracle",
            "secret conspiracy",
        );

        let result = classifier.classify(&article).await.unwrap();
        assert_eq!(result.label, Label::Fake);
        assert!((result.confidence - 0.9).abs() < 1e-6);
    }
}
