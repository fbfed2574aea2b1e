//! REST client for the Scryfall card catalog.
//!
//! Wraps the handful of Scryfall endpoints the server needs (search, named
//! lookup, lookup by id, random) using [`reqwest`]. Every request is bounded
//! by the client-wide timeout from [`ScryfallConfig`].

use std::time::Duration;

use async_trait::async_trait;
use cubekit_core::card::Card;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Url;

use crate::api::{CardList, CatalogApi, CatalogError, NameMatch, SearchMode, SearchRequest};

/// Public Scryfall API.
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Connection settings for [`ScryfallApi`].
#[derive(Debug, Clone)]
pub struct ScryfallConfig {
    /// Base HTTP URL; may carry a path prefix.
    pub base_url: String,
    /// Upper bound for a single request, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("cubekit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// HTTP client for the Scryfall API.
pub struct ScryfallApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ScryfallApi {
    /// Build a client with the configured timeout and default headers.
    pub fn new(config: &ScryfallConfig) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Self::with_client(client, &config.base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, CatalogError> {
        let base_url = Url::parse(base_url).map_err(|e| CatalogError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    // ---- private helpers ----

    /// Base URL extended by `segments`, each percent-encoded as a single
    /// path segment (`/` inside a segment becomes `%2F`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Map 404 to [`CatalogError::NotFound`] and any other non-2xx status to
    /// [`CatalogError::Api`] carrying the body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(self.endpoint(segments)?)
            .query(query)
            .send()
            .await?;

        Self::parse_response(response).await
    }
}

/// Query parameters for `/cards/search`.
fn search_params(request: &SearchRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", request.query.clone()),
        ("page", request.page.to_string()),
        ("format", "json".to_string()),
    ];
    if request.mode == SearchMode::Rich {
        params.push(("include_multilingual", "true".to_string()));
    }
    if let Some(unique) = request.unique {
        params.push(("unique", unique.to_string()));
    }
    if let Some(order) = request.order {
        params.push(("order", order.to_string()));
    }
    if let Some(dir) = request.dir {
        params.push(("dir", dir.to_string()));
    }
    params
}

#[async_trait]
impl CatalogApi for ScryfallApi {
    async fn search(&self, request: &SearchRequest) -> Result<CardList, CatalogError> {
        self.get_json(&["cards", "search"], &search_params(request)).await
    }

    async fn named(&self, mode: NameMatch, name: &str) -> Result<Card, CatalogError> {
        self.get_json(&["cards", "named"], &[(mode.as_param(), name.to_string())])
            .await
    }

    async fn card(&self, id: &str) -> Result<Card, CatalogError> {
        self.get_json(&["cards", id], &[]).await
    }

    async fn random(&self) -> Result<Card, CatalogError> {
        self.get_json(&["cards", "random"], &[]).await
    }
}
