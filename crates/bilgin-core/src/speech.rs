//! SpeechSink trait and speech-text sanitizing.
//!
//! Speaking a response sits entirely outside the response-generation
//! contract: the engine never waits on it and its failures are logged,
//! not surfaced. Implementations live in bilgin-infra (e.g.
//! `CommandSpeech`).

use bilgin_types::knowledge::SpeechError;

/// Trait for text-to-speech backends.
pub trait SpeechSink: Send + Sync {
    /// Speak the given text, returning once playback has finished.
    ///
    /// Callers are expected to pass text through
    /// [`sanitize_for_speech`] first.
    fn speak(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), SpeechError>> + Send;
}

/// Strip a response down to speakable words.
///
/// Drops URL tokens entirely and turns every other non-alphanumeric
/// character into a word break, so markers, emoji, and punctuation never
/// reach the speech program.
pub fn sanitize_for_speech(text: &str) -> String {
    let cleaned: String = text
        .split_whitespace()
        .filter(|token| !token.starts_with("http"))
        .map(|token| {
            token
                .chars()
                .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join(" ");

    // Collapse the breaks introduced above into single spaces.
    cleaned.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_urls() {
        let text = "🔗 Daha fazlası: https://tr.wikipedia.org/wiki/Ankara";
        assert_eq!(sanitize_for_speech(text), "Daha fazlası");
    }

    #[test]
    fn test_sanitize_strips_punctuation_and_emoji() {
        let text = "📘 Ankara:\nTürkiye'nin başkentidir. 🌟";
        assert_eq!(
            sanitize_for_speech(text),
            "Ankara Türkiye nin başkentidir"
        );
    }

    #[test]
    fn test_sanitize_keeps_plain_words() {
        assert_eq!(sanitize_for_speech("merhaba dünya"), "merhaba dünya");
    }

    #[test]
    fn test_sanitize_empty_input() {
        assert_eq!(sanitize_for_speech(""), "");
        assert_eq!(sanitize_for_speech("🌐"), "");
    }
}
