//! Veracity Core
//!
//! Shared types and error handling for the Veracity article classifier.
//!
//! This crate provides:
//! - The article and classification result types
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Article, ClassificationMetadata, ClassificationResult, Label};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Article, ClassificationMetadata, ClassificationResult, Label};
}
