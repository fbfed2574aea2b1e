//! Card search with multilingual term resolution.
//!
//! A user query is expanded into candidate terms (the query itself, then its
//! English translation when the query is Japanese). Each candidate gets one
//! attempt: a rich search including multilingual printings, retried once in
//! basic mode on any failure other than not-found. The first candidate with
//! hits wins; later candidates are never queried.

use std::sync::Arc;

use cubekit_core::card::Card;
use cubekit_core::terms;
use cubekit_core::translation::TranslationDictionary;

use crate::api::{CardList, CatalogApi, CatalogError, NameMatch, SearchMode, SearchRequest};

/// Locale used for the localized overlay when none is configured.
pub const DEFAULT_LOCALE: &str = "ja";

/// Outcome of searching a single candidate term.
#[derive(Debug)]
pub enum SearchAttempt {
    /// At least one hit.
    Success(CardList),
    /// The catalog answered but matched nothing.
    Empty(CardList),
    /// The catalog reported not-found.
    Skip,
    /// Both modes failed for a reason other than not-found.
    Fatal(CatalogError),
}

/// Errors surfaced by [`CardCatalog`].
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// No candidate term resolved to a card.
    #[error("Card not found: {query} (tried: {})", .tried.join(", "))]
    CardNotFound { query: String, tried: Vec<String> },

    /// Every candidate failed with a transport or upstream error.
    #[error("Card catalog unavailable for \"{query}\" (tried: {})", .tried.join(", "))]
    Unavailable {
        query: String,
        tried: Vec<String>,
        #[source]
        source: CatalogError,
    },

    /// A single-shot catalog call failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Folds candidate attempts into the final search result.
#[derive(Debug, Default)]
struct AttemptLog {
    best_empty: Option<CardList>,
    skipped: bool,
    last_failure: Option<CatalogError>,
}

impl AttemptLog {
    /// Record a non-success attempt.
    fn record(&mut self, attempt: SearchAttempt) {
        match attempt {
            SearchAttempt::Success(list) | SearchAttempt::Empty(list) => {
                let replace = self
                    .best_empty
                    .as_ref()
                    .map_or(true, |best| list.total_cards >= best.total_cards);
                if replace {
                    self.best_empty = Some(list);
                }
            }
            SearchAttempt::Skip => self.skipped = true,
            SearchAttempt::Fatal(error) => self.last_failure = Some(error),
        }
    }

    /// Result once every candidate has been tried without a hit.
    fn finish(self, query: &str, tried: Vec<String>) -> Result<CardList, SearchError> {
        if let Some(best) = self.best_empty {
            return Ok(best);
        }
        match self.last_failure {
            Some(source) if !self.skipped => Err(SearchError::Unavailable {
                query: query.to_string(),
                tried,
                source,
            }),
            _ => Ok(CardList::default()),
        }
    }
}

/// Catalog facade used by the HTTP handlers.
#[derive(Clone)]
pub struct CardCatalog {
    pub(crate) api: Arc<dyn CatalogApi>,
    dictionary: Arc<TranslationDictionary>,
    pub(crate) locale: String,
}

impl CardCatalog {
    pub fn new(api: Arc<dyn CatalogApi>, dictionary: Arc<TranslationDictionary>) -> Self {
        Self {
            api,
            dictionary,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Override the language used by the localized overlay.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Candidate search terms for `query`, in the order they are tried.
    pub fn candidates(&self, query: &str) -> Vec<String> {
        terms::resolve(query, &self.dictionary)
    }

    /// Search for cards matching `query`.
    ///
    /// Returns the first candidate's hits, else the largest empty answer,
    /// else an empty list. Fails only when every candidate hit a transport
    /// or upstream error.
    pub async fn search(&self, query: &str, page: u32) -> Result<CardList, SearchError> {
        let candidates = self.candidates(query);
        let mut log = AttemptLog::default();

        for candidate in &candidates {
            match self.attempt(candidate, page).await {
                SearchAttempt::Success(list) => {
                    tracing::debug!(
                        query,
                        candidate = %candidate,
                        total_cards = list.total_cards,
                        "Search candidate matched"
                    );
                    return Ok(list);
                }
                attempt => log.record(attempt),
            }
        }

        log.finish(query, candidates)
    }

    /// Search one candidate term, falling back from rich to basic mode.
    async fn attempt(&self, candidate: &str, page: u32) -> SearchAttempt {
        let rich = SearchRequest::new(candidate, page, SearchMode::Rich);
        let error = match self.api.search(&rich).await {
            Ok(list) => return classify(list),
            Err(e) if e.is_not_found() => return SearchAttempt::Skip,
            Err(e) => e,
        };

        tracing::debug!(candidate, error = %error, "Rich search failed, retrying in basic mode");

        let basic = SearchRequest::new(candidate, page, SearchMode::Basic);
        match self.api.search(&basic).await {
            Ok(list) => classify(list),
            Err(e) if e.is_not_found() => SearchAttempt::Skip,
            Err(e) => {
                tracing::warn!(candidate, error = %e, "Search candidate failed in both modes");
                SearchAttempt::Fatal(e)
            }
        }
    }

    /// Look a single card up by name, fuzzy first, then exact, for each
    /// candidate term.
    pub async fn get_by_name(&self, name: &str) -> Result<Card, SearchError> {
        let candidates = self.candidates(name);

        for candidate in &candidates {
            for mode in [NameMatch::Fuzzy, NameMatch::Exact] {
                match self.api.named(mode, candidate).await {
                    Ok(card) => return Ok(card),
                    Err(e) => {
                        tracing::debug!(
                            candidate = %candidate,
                            mode = mode.as_param(),
                            error = %e,
                            "Named lookup failed"
                        );
                    }
                }
            }
        }

        Err(SearchError::CardNotFound {
            query: name.to_string(),
            tried: candidates,
        })
    }

    /// Every printing of exactly `name`, oldest first. Unknown names yield
    /// an empty list.
    pub async fn get_printings(&self, name: &str) -> Result<Vec<Card>, SearchError> {
        match self.api.search(&SearchRequest::printings(name)).await {
            Ok(list) => Ok(list.data),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Look a card up by catalog id.
    pub async fn get_by_id(&self, id: &str) -> Result<Card, SearchError> {
        match self.api.card(id).await {
            Ok(card) => Ok(card),
            Err(e) if e.is_not_found() => Err(SearchError::CardNotFound {
                query: id.to_string(),
                tried: vec![id.to_string()],
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// A random card.
    pub async fn random(&self) -> Result<Card, SearchError> {
        Ok(self.api.random().await?)
    }
}

fn classify(list: CardList) -> SearchAttempt {
    if list.is_empty() {
        SearchAttempt::Empty(list)
    } else {
        SearchAttempt::Success(list)
    }
}
