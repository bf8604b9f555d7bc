//! MediaWiki Action API response shapes.
//!
//! Wikipedia-specific wire structures used for HTTP communication with
//! `/w/api.php` (requested with `formatversion=2`, so pages arrive as an
//! array and flags as booleans). They are NOT the provider-agnostic
//! lookup types from bilgin-types.

use serde::Deserialize;

/// Response to `action=query&list=search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Absent when the search matched nothing at all.
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// One ranked search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

/// Response to `action=query` with `prop=extracts|pageprops` or
/// `prop=info`.
#[derive(Debug, Clone, Deserialize)]
pub struct PagesResponse {
    #[serde(default)]
    pub query: Option<PagesQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagesQuery {
    #[serde(default)]
    pub pages: Vec<PageObject>,
}

/// One page object. Which optional fields are populated depends on the
/// `prop` parameters of the request.
#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub title: String,
    /// True when the requested title does not exist.
    #[serde(default)]
    pub missing: bool,
    /// Plain-text extract (`prop=extracts`).
    #[serde(default)]
    pub extract: Option<String>,
    /// Canonical URL (`prop=info&inprop=url`).
    #[serde(default)]
    pub fullurl: Option<String>,
    /// Page properties (`prop=pageprops`).
    #[serde(default)]
    pub pageprops: Option<PageProps>,
}

impl PageObject {
    /// Whether this page is a disambiguation page. The `disambiguation`
    /// pageprop is present (with an empty value) on such pages.
    pub fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageProps {
    #[serde(default)]
    pub disambiguation: Option<String>,
}

impl PagesResponse {
    /// Pull out the first (and for single-title queries, only) page.
    pub fn into_first_page(self) -> Option<PageObject> {
        self.query.and_then(|q| q.pages.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "batchcomplete": true,
            "query": {
                "searchinfo": {"totalhits": 2},
                "search": [
                    {"ns": 0, "title": "Ankara", "pageid": 1, "snippet": "..."},
                    {"ns": 0, "title": "Ankara Kalesi", "pageid": 2, "snippet": "..."}
                ]
            }
        }"#;
        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        let titles: Vec<String> = resp
            .query
            .unwrap()
            .search
            .into_iter()
            .map(|hit| hit.title)
            .collect();
        assert_eq!(titles, vec!["Ankara", "Ankara Kalesi"]);
    }

    #[test]
    fn test_parse_search_response_no_query_block() {
        let resp: SearchResponse = serde_json::from_str(r#"{"batchcomplete": true}"#).unwrap();
        assert!(resp.query.is_none());
    }

    #[test]
    fn test_parse_extract_response() {
        let json = r#"{
            "query": {
                "pages": [
                    {
                        "pageid": 1,
                        "ns": 0,
                        "title": "Ankara",
                        "extract": "Ankara, Türkiye'nin başkentidir."
                    }
                ]
            }
        }"#;
        let page = serde_json::from_str::<PagesResponse>(json)
            .unwrap()
            .into_first_page()
            .unwrap();
        assert_eq!(page.title, "Ankara");
        assert!(!page.missing);
        assert!(!page.is_disambiguation());
        assert!(page.extract.unwrap().starts_with("Ankara"));
    }

    #[test]
    fn test_parse_missing_page() {
        let json = r#"{
            "query": {
                "pages": [
                    {"ns": 0, "title": "Yokböylebirsayfa", "missing": true}
                ]
            }
        }"#;
        let page = serde_json::from_str::<PagesResponse>(json)
            .unwrap()
            .into_first_page()
            .unwrap();
        assert!(page.missing);
        assert!(page.extract.is_none());
    }

    #[test]
    fn test_parse_disambiguation_pageprop() {
        let json = r#"{
            "query": {
                "pages": [
                    {
                        "pageid": 3,
                        "ns": 0,
                        "title": "Merkür",
                        "extract": "Merkür şu anlamlara gelebilir:",
                        "pageprops": {"disambiguation": ""}
                    }
                ]
            }
        }"#;
        let page = serde_json::from_str::<PagesResponse>(json)
            .unwrap()
            .into_first_page()
            .unwrap();
        assert!(page.is_disambiguation());
    }

    #[test]
    fn test_parse_info_response() {
        let json = r#"{
            "query": {
                "pages": [
                    {
                        "pageid": 1,
                        "ns": 0,
                        "title": "Ankara",
                        "contentmodel": "wikitext",
                        "fullurl": "https://tr.wikipedia.org/wiki/Ankara",
                        "canonicalurl": "https://tr.wikipedia.org/wiki/Ankara"
                    }
                ]
            }
        }"#;
        let page = serde_json::from_str::<PagesResponse>(json)
            .unwrap()
            .into_first_page()
            .unwrap();
        assert_eq!(
            page.fullurl.as_deref(),
            Some("https://tr.wikipedia.org/wiki/Ankara")
        );
    }
}
