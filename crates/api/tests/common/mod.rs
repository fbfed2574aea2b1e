//! Shared helpers for API integration tests.
//!
//! [`build_test_app`] wires the production router and middleware stack to a
//! test database and a [`StubCatalog`] that serves a small fixed card pool,
//! so no test touches the network.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cubekit_api::config::{CatalogConfig, ServerConfig};
use cubekit_api::router::build_app_router;
use cubekit_api::state::AppState;
use cubekit_catalog::{CardCatalog, CardList, CatalogApi, CatalogError, NameMatch, SearchRequest};
use cubekit_core::card::{Card, ImageUris};
use cubekit_core::translation::TranslationDictionary;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        catalog: CatalogConfig {
            base_url: "http://catalog.invalid".to_string(),
            timeout_secs: 1,
            locale: "ja".to_string(),
            translations_path: None,
        },
    }
}

/// Full application router over `pool` and the default stub catalog.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, StubCatalog::default())
}

/// Full application router over `pool` and the given catalog stub.
pub fn build_test_app_with(pool: SqlitePool, stub: StubCatalog) -> Router {
    let config = test_config();
    let catalog = CardCatalog::new(Arc::new(stub), Arc::new(TranslationDictionary::builtin()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Catalog stub
// ---------------------------------------------------------------------------

/// In-process catalog serving a fixed card pool.
///
/// Searches match names case-insensitively by substring. `!"Name" lang:ja`
/// queries return the Japanese printing when one is known. With `down`
/// set, every call fails with an upstream 503.
pub struct StubCatalog {
    pub cards: Vec<Card>,
    pub japanese: Vec<(String, String)>,
    pub down: bool,
}

impl Default for StubCatalog {
    fn default() -> Self {
        Self {
            cards: vec![
                catalog_card("bolt-lea", "Lightning Bolt", "Instant", &["R"], 1.0, "lea"),
                catalog_card("bolt-m10", "Lightning Bolt", "Instant", &["R"], 1.0, "m10"),
                catalog_card("ring-lea", "Sol Ring", "Artifact", &[], 1.0, "lea"),
                catalog_card("counter-lea", "Counterspell", "Instant", &["U"], 2.0, "lea"),
            ],
            japanese: vec![
                ("Lightning Bolt".to_string(), "稲妻".to_string()),
                ("Counterspell".to_string(), "対抗呪文".to_string()),
            ],
            down: false,
        }
    }
}

impl StubCatalog {
    pub fn unavailable() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    fn check_up(&self) -> Result<(), CatalogError> {
        if self.down {
            return Err(CatalogError::Api {
                status: 503,
                body: "maintenance".to_string(),
            });
        }
        Ok(())
    }

    fn exact(&self, name: &str) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }
}

fn to_list(cards: Vec<Card>) -> Result<CardList, CatalogError> {
    if cards.is_empty() {
        return Err(CatalogError::NotFound);
    }
    Ok(CardList {
        total_cards: cards.len() as u64,
        has_more: false,
        data: cards,
    })
}

/// Name inside `!"..."`, if the query is an exact-name query.
fn exact_name(query: &str) -> Option<&str> {
    let rest = query.strip_prefix("!\"")?;
    rest.split('"').next()
}

#[async_trait]
impl CatalogApi for StubCatalog {
    async fn search(&self, request: &SearchRequest) -> Result<CardList, CatalogError> {
        self.check_up()?;

        if let Some(name) = exact_name(&request.query) {
            if request.query.contains(" lang:ja") {
                let printed = self
                    .japanese
                    .iter()
                    .find(|(english, _)| english == name)
                    .ok_or(CatalogError::NotFound)?;
                let printing = Card {
                    printed_name: Some(printed.1.clone()),
                    lang: Some("ja".to_string()),
                    ..self.exact(name).into_iter().next().unwrap_or_default()
                };
                return to_list(vec![printing]);
            }
            return to_list(self.exact(name));
        }

        let needle = request.query.to_lowercase();
        let mut seen = Vec::new();
        let hits = self
            .cards
            .iter()
            .filter(|card| card.name.to_lowercase().contains(&needle))
            .filter(|card| {
                let fresh = !seen.contains(&card.name);
                seen.push(card.name.clone());
                fresh
            })
            .cloned()
            .collect();
        to_list(hits)
    }

    async fn named(&self, _mode: NameMatch, name: &str) -> Result<Card, CatalogError> {
        self.check_up()?;
        self.exact(name).into_iter().next().ok_or(CatalogError::NotFound)
    }

    async fn card(&self, id: &str) -> Result<Card, CatalogError> {
        self.check_up()?;
        self.cards
            .iter()
            .find(|card| card.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn random(&self) -> Result<Card, CatalogError> {
        self.check_up()?;
        self.cards.first().cloned().ok_or(CatalogError::NotFound)
    }
}

pub fn catalog_card(id: &str, name: &str, type_line: &str, colors: &[&str], cmc: f64, set: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        type_line: Some(type_line.to_string()),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        cmc: Some(cmc),
        rarity: Some("common".to_string()),
        set: Some(set.to_string()),
        image_uris: Some(ImageUris::single(format!("https://img.test/{id}.jpg"))),
        ..Card::default()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body labelled as JSON, for malformed-payload tests.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}
