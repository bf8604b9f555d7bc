//! Chat session: mediates user input to the response engine.
//!
//! A session owns one transcript and one engine. It assumes a single
//! sequential caller -- one session per conversation, no concurrent
//! submitters -- so it holds no locks.

use bilgin_types::chat::Utterance;

use crate::chat::transcript::Transcript;
use crate::engine::ResponseEngine;
use crate::knowledge::KnowledgeSource;
use crate::random::RandomSource;

/// A single conversation: bounded transcript plus response engine.
pub struct ChatSession<S, R> {
    engine: ResponseEngine<S, R>,
    transcript: Transcript,
}

impl<S: KnowledgeSource, R: RandomSource> ChatSession<S, R> {
    /// Create a session around an engine. Transcript capacity comes from
    /// the engine's configuration.
    pub fn new(engine: ResponseEngine<S, R>) -> Self {
        let capacity = engine.config().transcript_capacity;
        Self {
            engine,
            transcript: Transcript::new(capacity),
        }
    }

    /// Access the engine driving this session.
    pub fn engine(&self) -> &ResponseEngine<S, R> {
        &self.engine
    }

    /// Submit one user input.
    ///
    /// Blank (empty or whitespace-only) input is a no-op returning `None`:
    /// the transcript is untouched and no lookup runs. Otherwise the
    /// trimmed text is recorded as a user utterance, the engine produces a
    /// response, and the resulting assistant utterance is recorded and
    /// returned.
    pub async fn submit(&mut self, text: &str) -> Option<Utterance> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.transcript.push(Utterance::user(trimmed));

        let response = self.engine.respond(trimmed).await;
        let reply = Utterance::assistant(response);
        self.transcript.push(reply.clone());

        Some(reply)
    }

    /// Current transcript contents, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &Utterance> {
        self.transcript.iter()
    }

    /// Number of utterances currently retained.
    pub fn len(&self) -> usize {
        self.transcript.len()
    }

    /// Whether nothing has been exchanged yet.
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}
