//! Knowledge-lookup types for Bilgin.
//!
//! These types model the data shapes for the external encyclopedia
//! lookup: the retrieved article, the response category the engine
//! settled on, and the internal error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// A successfully retrieved encyclopedia article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    /// Canonical article title as resolved by the source.
    pub title: String,
    /// Short plain-text summary (target length: a few sentences).
    pub summary: String,
    /// Canonical reference link for the article.
    pub url: String,
}

/// Which kind of response the engine produced.
///
/// Diagnostic tag only -- the engine's caller-facing contract is a plain
/// string regardless of category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    /// Input matched a greeting token; a canned greeting was returned.
    Greeting,
    /// The lookup succeeded and the response carries article content.
    Lookup,
    /// The lookup found nothing or failed; a canned apology was returned.
    Fallback,
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCategory::Greeting => write!(f, "greeting"),
            ResponseCategory::Lookup => write!(f, "lookup"),
            ResponseCategory::Fallback => write!(f, "fallback"),
        }
    }
}

/// Errors from the external knowledge source.
///
/// Internal taxonomy only: the response engine absorbs every variant
/// into a fallback response before returning to its caller.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("network error: {0}")]
    Network(String),

    #[error("page not found: '{0}'")]
    NotFound(String),

    #[error("'{title}' is a disambiguation page")]
    Disambiguation { title: String },

    #[error("unexpected response shape: {0}")]
    Deserialization(String),
}

/// Errors from the speech collaborator.
///
/// Speaking sits outside the response-generation contract; callers log
/// these and carry on.
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech program failed to start: {0}")]
    Spawn(String),

    #[error("speech program exited with status {0}")]
    Exited(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(ResponseCategory::Greeting.to_string(), "greeting");
        assert_eq!(ResponseCategory::Lookup.to_string(), "lookup");
        assert_eq!(ResponseCategory::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::Disambiguation {
            title: "Merkür".to_string(),
        };
        assert_eq!(err.to_string(), "'Merkür' is a disambiguation page");

        let err = LookupError::NotFound("yok böyle bir şey".to_string());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_lookup_result_serialize() {
        let result = LookupResult {
            title: "Atatürk".to_string(),
            summary: "Mustafa Kemal Atatürk...".to_string(),
            url: "https://tr.wikipedia.org/wiki/Atat%C3%BCrk".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"title\":\"Atatürk\""));
    }
}
