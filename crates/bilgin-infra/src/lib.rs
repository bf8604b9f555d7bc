//! Infrastructure implementations for Bilgin.
//!
//! Concrete backends for the trait seams defined in bilgin-core:
//! [`wikipedia::WikipediaSource`] for knowledge lookups and
//! [`speech::CommandSpeech`] for spoken output, plus the config-file
//! loader.

pub mod config;
pub mod speech;
pub mod wikipedia;
