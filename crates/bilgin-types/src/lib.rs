//! Shared domain types for Bilgin.
//!
//! This crate contains the core domain types used across the Bilgin
//! assistant: utterances, lookup results, configuration, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod knowledge;
