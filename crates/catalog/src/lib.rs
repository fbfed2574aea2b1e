//! Card catalog client.
//!
//! Talks to the external card catalog (Scryfall) through the [`CatalogApi`]
//! trait, resolves user queries into candidate search terms, walks the
//! rich/basic search fallback chain and overlays Japanese printed text onto
//! canonical cards.

pub mod api;
pub mod localize;
pub mod scryfall;
pub mod search;

pub use api::{CardList, CatalogApi, CatalogError, NameMatch, SearchMode, SearchRequest};
pub use scryfall::{ScryfallApi, ScryfallConfig};
pub use search::{CardCatalog, SearchAttempt, SearchError};
