//! Error types for Veracity

/// Result type alias using Veracity's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Veracity operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The inference endpoint could not be reached or returned a
    /// non-success status. Never retried internally; the caller decides.
    #[error("inference endpoint unavailable: {0}")]
    InferenceUnavailable(String),

    /// Classifier construction or execution errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new inference-unavailable error
    pub fn inference_unavailable(msg: impl Into<String>) -> Self {
        Self::InferenceUnavailable(msg.into())
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the error is the transport/availability failure kind
    pub fn is_inference_unavailable(&self) -> bool {
        matches!(self, Self::InferenceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_unavailable_display() {
        let err = Error::inference_unavailable("connection refused");
        assert_eq!(
            err.to_string(),
            "inference endpoint unavailable: connection refused"
        );
        assert!(err.is_inference_unavailable());
    }

    #[test]
    fn test_classifier_error_is_not_unavailable() {
        let err = Error::classifier("bad matcher");
        assert!(!err.is_inference_unavailable());
    }
}
