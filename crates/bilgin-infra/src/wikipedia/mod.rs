//! Wikipedia knowledge source.
//!
//! Implements [`bilgin_core::knowledge::KnowledgeSource`] against the
//! MediaWiki Action API of a language-specific Wikipedia.

mod client;
mod types;

pub use client::WikipediaSource;
