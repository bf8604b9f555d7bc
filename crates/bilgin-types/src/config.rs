//! Configuration types for Bilgin.
//!
//! `BilginConfig` represents the top-level `config.toml` that controls
//! the lookup language, the greeting and fallback pools, the transcript
//! capacity, and the speech collaborator.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Bilgin assistant.
///
/// Loaded from `~/.bilgin/config.toml`. All fields have sensible defaults;
/// the default pools carry the Turkish strings the assistant ships with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilginConfig {
    /// Two-letter language code for the knowledge source (e.g. "tr", "en").
    #[serde(default = "default_language")]
    pub language: String,

    /// Number of sentences requested from article summaries.
    #[serde(default = "default_summary_sentences")]
    pub summary_sentences: u8,

    /// Maximum number of utterances kept in a session transcript.
    #[serde(default = "default_transcript_capacity")]
    pub transcript_capacity: usize,

    /// Tokens that classify an input as a greeting (matched case-insensitively).
    #[serde(default = "default_greeting_tokens")]
    pub greeting_tokens: Vec<String>,

    /// Canned responses for greeting inputs.
    #[serde(default = "default_greeting_pool")]
    pub greeting_pool: Vec<String>,

    /// Canned apologies for lookups that found nothing or failed.
    #[serde(default = "default_fallback_pool")]
    pub fallback_pool: Vec<String>,

    /// Speech collaborator settings.
    #[serde(default)]
    pub speech: SpeechConfig,
}

fn default_language() -> String {
    "tr".to_string()
}

fn default_summary_sentences() -> u8 {
    2
}

fn default_transcript_capacity() -> usize {
    20
}

fn default_greeting_tokens() -> Vec<String> {
    ["merhaba", "selam", "hey", "nasılsın", "iyi günler"]
        .map(String::from)
        .to_vec()
}

fn default_greeting_pool() -> Vec<String> {
    [
        "Merhaba! Nasıl yardımcı olabilirim? 🌟",
        "Selamlar! Sohbete başlamak için hazırım. 😊",
        "İyi günler! Bilgi almak için sorunuzu yazın. 📚",
    ]
    .map(String::from)
    .to_vec()
}

fn default_fallback_pool() -> Vec<String> {
    [
        "Şu anda bu bilgiye ulaşamıyorum. 🌐",
        "Sanırım bir yanlış anlaşılma oldu. 😅",
        "Bu konuda yeterli bilgim yok, özür dilerim. 🙏",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for BilginConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            summary_sentences: default_summary_sentences(),
            transcript_capacity: default_transcript_capacity(),
            greeting_tokens: default_greeting_tokens(),
            greeting_pool: default_greeting_pool(),
            fallback_pool: default_fallback_pool(),
            speech: SpeechConfig::default(),
        }
    }
}

/// Settings for the text-to-speech collaborator.
///
/// Speech is produced by spawning an external program with the sanitized
/// response text as its final argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Whether responses are spoken aloud.
    #[serde(default)]
    pub enabled: bool,

    /// Program to spawn (e.g. "espeak-ng", "say").
    #[serde(default = "default_speech_program")]
    pub program: String,

    /// Extra arguments passed before the text (e.g. voice or rate flags).
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_speech_program() -> String {
    "espeak-ng".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            program: default_speech_program(),
            args: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_values() {
        let config = BilginConfig::default();
        assert_eq!(config.language, "tr");
        assert_eq!(config.summary_sentences, 2);
        assert_eq!(config.transcript_capacity, 20);
        assert_eq!(config.greeting_tokens.len(), 5);
        assert_eq!(config.greeting_pool.len(), 3);
        assert_eq!(config.fallback_pool.len(), 3);
        assert!(!config.speech.enabled);
    }

    #[test]
    fn test_config_deserialize_empty_uses_defaults() {
        let config: BilginConfig = toml::from_str("").unwrap();
        assert_eq!(config.language, "tr");
        assert_eq!(config.greeting_pool.len(), 3);
        assert_eq!(config.speech.program, "espeak-ng");
    }

    #[test]
    fn test_config_deserialize_partial_override() {
        let toml_str = r#"
language = "en"
transcript_capacity = 8

[speech]
enabled = true
program = "say"
"#;
        let config: BilginConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.language, "en");
        assert_eq!(config.transcript_capacity, 8);
        // Untouched fields keep their defaults.
        assert_eq!(config.summary_sentences, 2);
        assert_eq!(config.fallback_pool.len(), 3);
        assert!(config.speech.enabled);
        assert_eq!(config.speech.program, "say");
        assert!(config.speech.args.is_empty());
    }
}
