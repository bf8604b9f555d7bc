//! WikipediaSource -- concrete [`KnowledgeSource`] implementation.
//!
//! Talks to the MediaWiki Action API (`/w/api.php`) of a language-specific
//! Wikipedia: full-text search for candidate titles, plain-text extracts
//! limited to a sentence count, and canonical page URLs. Pages flagged
//! with the `disambiguation` pageprop surface as
//! [`LookupError::Disambiguation`] so the engine can log them distinctly
//! before degrading to a fallback response.

use std::time::Duration;

use bilgin_core::knowledge::KnowledgeSource;
use bilgin_types::knowledge::LookupError;

use super::types::{PageObject, PagesResponse, SearchResponse};

/// Identify ourselves per Wikimedia API etiquette.
const USER_AGENT: &str = concat!("bilgin/", env!("CARGO_PKG_VERSION"));

/// How many ranked candidates to request per search.
const SEARCH_LIMIT: u8 = 5;

/// Wikipedia-backed knowledge source.
pub struct WikipediaSource {
    client: reqwest::Client,
    base_url: String,
}

impl WikipediaSource {
    /// Create a source for one language edition (e.g. "tr", "en").
    pub fn new(language: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: format!("https://{language}.wikipedia.org/w/api.php"),
        }
    }

    /// Override the API endpoint (useful for testing or mirrors).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Issue one Action API query and deserialize the JSON body.
    async fn query<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| LookupError::Network(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Network(format!("HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Deserialization(format!("failed to parse response: {e}")))
    }

    /// Fetch the single page object for a title, resolving redirects.
    async fn page(&self, title: &str, params: &[(&str, &str)]) -> Result<PageObject, LookupError> {
        let mut full_params = vec![("titles", title), ("redirects", "1")];
        full_params.extend_from_slice(params);

        let page = self
            .query::<PagesResponse>(&full_params)
            .await?
            .into_first_page()
            .ok_or_else(|| {
                LookupError::Deserialization(format!("no page object returned for '{title}'"))
            })?;

        if page.missing {
            return Err(LookupError::NotFound(title.to_string()));
        }
        Ok(page)
    }
}

impl KnowledgeSource for WikipediaSource {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn search(&self, term: &str) -> Result<Vec<String>, LookupError> {
        let limit = SEARCH_LIMIT.to_string();
        let resp: SearchResponse = self
            .query(&[("list", "search"), ("srsearch", term), ("srlimit", &limit)])
            .await?;

        // A missing query block means zero hits, not a malformed response.
        let titles = resp
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();
        Ok(titles)
    }

    async fn summary(&self, title: &str, sentences: u8) -> Result<String, LookupError> {
        let sentences = sentences.to_string();
        let page = self
            .page(
                title,
                &[
                    ("prop", "extracts|pageprops"),
                    ("exsentences", &sentences),
                    ("explaintext", "1"),
                    ("ppprop", "disambiguation"),
                ],
            )
            .await?;

        if page.is_disambiguation() {
            return Err(LookupError::Disambiguation { title: page.title });
        }

        page.extract
            .filter(|extract| !extract.is_empty())
            .ok_or_else(|| {
                LookupError::Deserialization(format!("page '{title}' carried no extract"))
            })
    }

    async fn page_url(&self, title: &str) -> Result<String, LookupError> {
        let page = self
            .page(title, &[("prop", "info"), ("inprop", "url")])
            .await?;

        page.fullurl.ok_or_else(|| {
            LookupError::Deserialization(format!("page '{title}' carried no URL"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_for_language() {
        let source = WikipediaSource::new("tr");
        assert_eq!(source.base_url, "https://tr.wikipedia.org/w/api.php");

        let source = WikipediaSource::new("en");
        assert_eq!(source.base_url, "https://en.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_base_url_override() {
        let source =
            WikipediaSource::new("tr").with_base_url("http://localhost:8080/api.php".to_string());
        assert_eq!(source.base_url, "http://localhost:8080/api.php");
    }

    #[test]
    fn test_source_name() {
        assert_eq!(WikipediaSource::new("tr").name(), "wikipedia");
    }
}
