//! Chat session and transcript management.

pub mod session;
pub mod transcript;

pub use session::ChatSession;
pub use transcript::Transcript;
