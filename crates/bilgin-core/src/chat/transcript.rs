//! Bounded conversation transcript.
//!
//! FIFO buffer of utterances with a fixed capacity: appending beyond
//! capacity evicts the oldest entry. The transcript is recorded for
//! display only -- response generation never reads it back.

use std::collections::VecDeque;

use bilgin_types::chat::Utterance;

/// Ordered, bounded history of utterances, oldest first.
#[derive(Debug)]
pub struct Transcript {
    entries: VecDeque<Utterance>,
    capacity: usize,
}

impl Transcript {
    /// Create an empty transcript. A zero capacity is bumped to 1 so the
    /// buffer can always hold the latest utterance.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of utterances retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of utterances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the transcript holds no utterances.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an utterance, evicting the oldest if at capacity.
    pub fn push(&mut self, utterance: Utterance) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(utterance);
    }

    /// Iterate over the transcript, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Utterance> {
        self.entries.iter()
    }
}
