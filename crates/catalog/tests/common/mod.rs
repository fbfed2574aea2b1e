//! Shared test fixtures for catalog integration tests.
//!
//! [`FakeCatalog`] implements [`CatalogApi`] in-process: responses come from
//! closures supplied by each test, and every call is recorded so tests can
//! assert on call counts and order.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cubekit_catalog::{CardCatalog, CardList, CatalogApi, CatalogError, NameMatch, SearchRequest};
use cubekit_core::card::Card;
use cubekit_core::translation::TranslationDictionary;
use tokio::sync::Barrier;

type SearchFn = Box<dyn Fn(&SearchRequest) -> Result<CardList, CatalogError> + Send + Sync>;
type NamedFn = Box<dyn Fn(NameMatch, &str) -> Result<Card, CatalogError> + Send + Sync>;

pub struct FakeCatalog {
    on_search: SearchFn,
    on_named: NamedFn,
    cards: Vec<Card>,
    gate: Option<Arc<Barrier>>,
    pub searches: Mutex<Vec<SearchRequest>>,
    pub lookups: Mutex<Vec<(NameMatch, String)>>,
}

impl FakeCatalog {
    /// A catalog that knows nothing: every call is not-found.
    pub fn new() -> Self {
        Self {
            on_search: Box::new(|_| Err(CatalogError::NotFound)),
            on_named: Box::new(|_, _| Err(CatalogError::NotFound)),
            cards: Vec::new(),
            gate: None,
            searches: Mutex::new(Vec::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn on_search<F>(mut self, f: F) -> Self
    where
        F: Fn(&SearchRequest) -> Result<CardList, CatalogError> + Send + Sync + 'static,
    {
        self.on_search = Box::new(f);
        self
    }

    pub fn on_named<F>(mut self, f: F) -> Self
    where
        F: Fn(NameMatch, &str) -> Result<Card, CatalogError> + Send + Sync + 'static,
    {
        self.on_named = Box::new(f);
        self
    }

    /// Cards served by id lookups; the first one is also the random card.
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Hold every search until `barrier` has as many waiters as its size.
    /// Lookups issued one after another never get past the gate.
    pub fn with_gate(mut self, barrier: Arc<Barrier>) -> Self {
        self.gate = Some(barrier);
        self
    }

    pub fn search_log(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }

    pub fn lookup_log(&self) -> Vec<(NameMatch, String)> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<CardList, CatalogError> {
        self.searches.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.wait().await;
        }
        (self.on_search)(request)
    }

    async fn named(&self, mode: NameMatch, name: &str) -> Result<Card, CatalogError> {
        self.lookups.lock().unwrap().push((mode, name.to_string()));
        (self.on_named)(mode, name)
    }

    async fn card(&self, id: &str) -> Result<Card, CatalogError> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn random(&self) -> Result<Card, CatalogError> {
        self.cards.first().cloned().ok_or(CatalogError::NotFound)
    }
}

/// Wrap a fake in a [`CardCatalog`] with the bundled dictionary, keeping a
/// handle on the fake for call assertions.
pub fn catalog_with(fake: FakeCatalog) -> (CardCatalog, Arc<FakeCatalog>) {
    let fake = Arc::new(fake);
    let catalog = CardCatalog::new(fake.clone(), Arc::new(TranslationDictionary::builtin()));
    (catalog, fake)
}

pub fn card(name: &str) -> Card {
    Card {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        ..Card::default()
    }
}

pub fn list_of(cards: Vec<Card>) -> CardList {
    CardList {
        total_cards: cards.len() as u64,
        has_more: false,
        data: cards,
    }
}

pub fn upstream_error(status: u16) -> CatalogError {
    CatalogError::Api {
        status,
        body: "upstream trouble".to_string(),
    }
}
