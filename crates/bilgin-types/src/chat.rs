//! Utterance types for Bilgin conversations.
//!
//! An utterance is one message in a conversation -- either typed by the
//! user or generated by the assistant. Utterances are immutable once
//! constructed and are owned by the transcript that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who produced an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::User => write!(f, "user"),
            Origin::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Origin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Origin::User),
            "assistant" => Ok(Origin::Assistant),
            other => Err(format!("invalid utterance origin: '{other}'")),
        }
    }
}

/// A single message within a conversation.
///
/// Constructed once, never mutated. The timestamp is captured at
/// construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    /// UUIDv7 utterance ID.
    pub id: Uuid,
    pub text: String,
    pub origin: Origin,
    pub timestamp: DateTime<Utc>,
}

impl Utterance {
    /// Create a new utterance with the current timestamp.
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            origin,
            timestamp: Utc::now(),
        }
    }

    /// Create a user utterance.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Origin::User)
    }

    /// Create an assistant utterance.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Origin::Assistant)
    }
}
