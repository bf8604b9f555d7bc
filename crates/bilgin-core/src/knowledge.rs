//! KnowledgeSource trait definition.
//!
//! This is the abstraction over the external encyclopedia backend.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the
//! engine is generic over the source, so object safety is not needed.

use bilgin_types::knowledge::LookupError;

/// Trait for encyclopedia lookup backends.
///
/// All three calls can fail (network, not-found, disambiguation). The
/// response engine catches every failure; implementations should map
/// their transport errors into [`LookupError`] rather than panicking.
///
/// Implementations live in bilgin-infra (e.g. `WikipediaSource`).
pub trait KnowledgeSource: Send + Sync {
    /// Human-readable source name (e.g. "wikipedia").
    fn name(&self) -> &str;

    /// Search for a term, returning ranked candidate article titles.
    ///
    /// An empty vector means the source had no match; that is not an error.
    fn search(
        &self,
        term: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, LookupError>> + Send;

    /// Fetch a plain-text summary of an article, limited to `sentences`.
    fn summary(
        &self,
        title: &str,
        sentences: u8,
    ) -> impl std::future::Future<Output = Result<String, LookupError>> + Send;

    /// Fetch the canonical URL for an article.
    fn page_url(
        &self,
        title: &str,
    ) -> impl std::future::Future<Output = Result<String, LookupError>> + Send;
}
