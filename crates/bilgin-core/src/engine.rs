//! Response engine: greeting detection, knowledge lookup, fallback policy.
//!
//! The engine's contract is total: [`ResponseEngine::respond`] always
//! returns a displayable string. Every lookup failure mode -- no
//! candidates, network error, missing page, disambiguation -- collapses
//! into a canned fallback pick before it can reach the caller.

use tracing::{debug, warn};

use bilgin_types::config::BilginConfig;
use bilgin_types::knowledge::{LookupError, LookupResult, ResponseCategory};

use crate::knowledge::KnowledgeSource;
use crate::random::RandomSource;

/// Returned when a configured pool is empty. Keeps the contract total
/// even under a broken config file.
const EMPTY_POOL_RESPONSE: &str = "...";

/// Marker prefixing the title line of a lookup response.
const TITLE_MARKER: &str = "📘";

/// Label on the reference line of a lookup response.
const REFERENCE_LABEL: &str = "🔗 Daha fazlası:";

/// Decides how to answer one free-text input.
///
/// Generic over the knowledge backend and the randomness source so tests
/// can substitute both.
pub struct ResponseEngine<S, R> {
    source: S,
    random: R,
    config: BilginConfig,
}

impl<S: KnowledgeSource, R: RandomSource> ResponseEngine<S, R> {
    /// Create an engine over a knowledge source and a randomness source.
    pub fn new(source: S, random: R, config: BilginConfig) -> Self {
        Self {
            source,
            random,
            config,
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &BilginConfig {
        &self.config
    }

    /// Answer one input. Never fails; all lookup errors degrade to a
    /// fallback string.
    pub async fn respond(&self, input: &str) -> String {
        self.respond_categorized(input).await.0
    }

    /// Answer one input, also reporting which category the response fell
    /// into. Same semantics as [`respond`](Self::respond); the category
    /// exists for diagnostics and tests.
    pub async fn respond_categorized(&self, input: &str) -> (String, ResponseCategory) {
        if self.is_greeting(input) {
            return (
                self.pick(&self.config.greeting_pool),
                ResponseCategory::Greeting,
            );
        }

        match self.lookup(input).await {
            Ok(Some(result)) => (Self::compose(&result), ResponseCategory::Lookup),
            Ok(None) => {
                debug!(source = self.source.name(), term = input, "lookup returned no candidates");
                (
                    self.pick(&self.config.fallback_pool),
                    ResponseCategory::Fallback,
                )
            }
            Err(err) => {
                warn!(source = self.source.name(), term = input, error = %err, "lookup failed");
                (
                    self.pick(&self.config.fallback_pool),
                    ResponseCategory::Fallback,
                )
            }
        }
    }

    /// Whether the input contains any configured greeting token.
    ///
    /// Substring containment over the lowercased input, matching the
    /// original assistant's behavior ("heyecan" greets because it
    /// contains "hey"). Tokens are lowercased as well so a config that
    /// writes "Hello" still matches.
    fn is_greeting(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        self.config
            .greeting_tokens
            .iter()
            .any(|token| lowered.contains(&token.to_lowercase()))
    }

    /// Run the three-step lookup: search, summarize the first hit, fetch
    /// its URL. `Ok(None)` means the search produced no candidates.
    async fn lookup(&self, term: &str) -> Result<Option<LookupResult>, LookupError> {
        let titles = self.source.search(term).await?;
        let Some(title) = titles.into_iter().next() else {
            return Ok(None);
        };

        let summary = self
            .source
            .summary(&title, self.config.summary_sentences)
            .await?;
        let url = self.source.page_url(&title).await?;

        Ok(Some(LookupResult {
            title,
            summary,
            url,
        }))
    }

    /// Compose a lookup response: title line, summary, reference line.
    fn compose(result: &LookupResult) -> String {
        format!(
            "{TITLE_MARKER} {}:\n{}\n\n{REFERENCE_LABEL} {}",
            result.title, result.summary, result.url
        )
    }

    /// Pick one string from a pool via the injected randomness source.
    fn pick(&self, pool: &[String]) -> String {
        if pool.is_empty() {
            return EMPTY_POOL_RESPONSE.to_string();
        }
        pool[self.random.pick_index(pool.len())].clone()
    }
}
