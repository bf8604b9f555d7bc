//! Business logic for the Bilgin assistant.
//!
//! Home of the response engine (greeting detection, knowledge lookup,
//! fallback policy), the bounded chat session, and the trait seams that
//! infrastructure crates implement: [`knowledge::KnowledgeSource`] for the
//! encyclopedia backend and [`speech::SpeechSink`] for spoken output.

pub mod chat;
pub mod engine;
pub mod knowledge;
pub mod random;
pub mod speech;
