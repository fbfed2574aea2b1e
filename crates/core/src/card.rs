//! Card and cube-card models.
//!
//! [`Card`] mirrors the catalog's JSON shape (snake_case keys) so a card
//! returned by a search can be posted straight back into a cube. Every
//! field is defaulted on deserialization; required-field checks live in
//! [`crate::validation`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Image URL variants published by the catalog for one printing or face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

impl ImageUris {
    /// Image set where every display size points at the same URL.
    pub fn single(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            small: Some(uri.clone()),
            normal: Some(uri),
            ..Self::default()
        }
    }
}

/// One face of a multi-faced card (transform, modal, split).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFace {
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub image_uris: Option<ImageUris>,
}

/// A canonical card record as served by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub collector_number: Option<String>,
    pub released_at: Option<String>,
    pub lang: Option<String>,
    pub image_uris: Option<ImageUris>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
    pub prices: Option<BTreeMap<String, Option<String>>>,
    pub printed_name: Option<String>,
    pub printed_type_line: Option<String>,
    pub printed_text: Option<String>,
}

impl Card {
    /// Best image to show for this card: the card's own normal or small
    /// image, falling back to the first face for multi-faced cards.
    pub fn display_image(&self) -> Option<&str> {
        let own = self
            .image_uris
            .as_ref()
            .and_then(|uris| uris.normal.as_deref().or(uris.small.as_deref()));

        own.or_else(|| {
            self.card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.image_uris.as_ref())
                .and_then(|uris| uris.normal.as_deref().or(uris.small.as_deref()))
        })
    }

    /// USD price from the price snapshot, if the catalog reported one.
    pub fn price_usd(&self) -> Option<&str> {
        self.prices
            .as_ref()
            .and_then(|prices| prices.get("usd"))
            .and_then(|usd| usd.as_deref())
    }

    /// Copy the localized overlay fields of `printing` onto this card.
    ///
    /// Canonical fields are left untouched.
    pub fn with_localized(mut self, printing: &Card) -> Self {
        self.printed_name = printing.printed_name.clone();
        self.printed_type_line = printing.printed_type_line.clone();
        self.printed_text = printing.printed_text.clone();
        self
    }
}

fn default_quantity() -> i64 {
    1
}

/// A card as it lives inside a cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubeCard {
    #[serde(flatten)]
    pub card: Card,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Alternate printing chosen by the user for display. Canonical fields
    /// always come from `card`.
    #[serde(default)]
    pub selected_printing: Option<Box<Card>>,
    /// Flattened display image, as persisted.
    #[serde(default)]
    pub image_uri: Option<String>,
    /// Flattened USD price, as persisted.
    #[serde(default)]
    pub price_usd: Option<String>,
}

impl CubeCard {
    /// Wrap a catalog card with default cube metadata (quantity 1, no notes,
    /// no tags, no selected printing).
    pub fn from_card(card: Card) -> Self {
        Self {
            card,
            quantity: default_quantity(),
            notes: String::new(),
            tags: Vec::new(),
            selected_printing: None,
            image_uri: None,
            price_usd: None,
        }
    }

    /// Image to persist: an explicit `image_uri` wins over the card's own
    /// image set.
    pub fn storage_image_uri(&self) -> Option<&str> {
        self.image_uri
            .as_deref()
            .filter(|uri| !uri.is_empty())
            .or_else(|| self.card.display_image())
    }

    /// Price to persist: an explicit `price_usd` wins over the price snapshot.
    pub fn storage_price_usd(&self) -> Option<&str> {
        self.price_usd
            .as_deref()
            .filter(|price| !price.is_empty())
            .or_else(|| self.card.price_usd())
    }
}
