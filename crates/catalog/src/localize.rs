//! Localized overlay for canonical cards.
//!
//! Looks up a printing of each card in the configured locale and copies its
//! printed name, type line and rules text onto the canonical card. Lookups
//! never fail the caller: a card without a localized printing, or whose
//! lookup errored, comes back unchanged.

use cubekit_core::card::Card;
use futures::future::join_all;

use crate::api::{CardList, CatalogError, SearchRequest};
use crate::search::{CardCatalog, SearchError};

impl CardCatalog {
    /// First printing of `card` in the configured locale, if any.
    async fn localized_printing(&self, card: &Card) -> Result<Option<Card>, CatalogError> {
        let request = SearchRequest::localized(&card.name, &self.locale);
        match self.api.search(&request).await {
            Ok(list) => Ok(list.data.into_iter().next()),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Overlay the localized printed fields onto `card`.
    pub async fn merge_localized(&self, card: Card) -> Card {
        match self.localized_printing(&card).await {
            Ok(Some(printing)) => card.with_localized(&printing),
            Ok(None) => card,
            Err(e) => {
                tracing::debug!(card = %card.name, locale = %self.locale, error = %e, "Localized lookup failed");
                card
            }
        }
    }

    /// Localize every card concurrently, preserving input order.
    ///
    /// Each lookup runs as its own task so one card's failure, even a panic,
    /// leaves the others untouched.
    pub async fn merge_localized_batch(&self, cards: Vec<Card>) -> Vec<Card> {
        let (originals, handles): (Vec<Card>, Vec<_>) = cards
            .into_iter()
            .map(|card| {
                let catalog = self.clone();
                let original = card.clone();
                let handle = tokio::spawn(async move { catalog.merge_localized(card).await });
                (original, handle)
            })
            .unzip();

        join_all(handles)
            .await
            .into_iter()
            .zip(originals)
            .map(|(joined, original)| match joined {
                Ok(card) => card,
                Err(e) => {
                    tracing::warn!(card = %original.name, error = %e, "Localization task aborted");
                    original
                }
            })
            .collect()
    }

    /// [`CardCatalog::search`] followed by a batch localized merge of the
    /// returned page.
    pub async fn search_localized(&self, query: &str, page: u32) -> Result<CardList, SearchError> {
        let mut list = self.search(query, page).await?;
        if !list.data.is_empty() {
            list.data = self.merge_localized_batch(std::mem::take(&mut list.data)).await;
        }
        Ok(list)
    }
}
