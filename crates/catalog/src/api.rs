//! Catalog transport abstraction.
//!
//! [`CatalogApi`] is the seam between the search logic and the HTTP client.
//! [`crate::ScryfallApi`] is the production implementation; tests plug in
//! an in-process fake.

use async_trait::async_trait;
use cubekit_core::card::Card;
use serde::{Deserialize, Serialize};

/// Whether a search asks the catalog for non-English printings too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// `include_multilingual=true`.
    Rich,
    /// Plain search, no extra flags.
    Basic,
}

/// How `/cards/named` matches the given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    Fuzzy,
    Exact,
}

impl NameMatch {
    /// Query parameter key used by the catalog.
    pub fn as_param(self) -> &'static str {
        match self {
            NameMatch::Fuzzy => "fuzzy",
            NameMatch::Exact => "exact",
        }
    }
}

/// Parameters of one `/cards/search` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    pub mode: SearchMode,
    pub unique: Option<&'static str>,
    pub order: Option<&'static str>,
    pub dir: Option<&'static str>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32, mode: SearchMode) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            mode,
            unique: None,
            order: None,
            dir: None,
        }
    }

    /// Every printing of exactly `name`, oldest first.
    pub fn printings(name: &str) -> Self {
        Self {
            unique: Some("prints"),
            order: Some("released"),
            dir: Some("asc"),
            ..Self::new(exact_name_query(name), 1, SearchMode::Basic)
        }
    }

    /// Printings of exactly `name` in language `lang`.
    pub fn localized(name: &str, lang: &str) -> Self {
        Self::new(format!("{} lang:{lang}", exact_name_query(name)), 1, SearchMode::Basic)
    }
}

fn exact_name_query(name: &str) -> String {
    format!("!\"{name}\"")
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardList {
    pub data: Vec<Card>,
    pub has_more: bool,
    pub total_cards: u64,
}

impl CardList {
    pub fn is_empty(&self) -> bool {
        self.total_cards == 0
    }
}

/// Errors from the catalog transport layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog answered 404 (no such card, or a search with no hits).
    #[error("Not found in catalog")]
    NotFound,

    /// The catalog returned a non-2xx status other than 404.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),

    /// The configured base URL cannot carry path segments.
    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound)
    }
}

/// Operations the card catalog offers.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// `GET /cards/search`.
    async fn search(&self, request: &SearchRequest) -> Result<CardList, CatalogError>;

    /// `GET /cards/named?fuzzy=` or `?exact=`.
    async fn named(&self, mode: NameMatch, name: &str) -> Result<Card, CatalogError>;

    /// `GET /cards/{id}`.
    async fn card(&self, id: &str) -> Result<Card, CatalogError>;

    /// `GET /cards/random`.
    async fn random(&self) -> Result<Card, CatalogError>;
}
