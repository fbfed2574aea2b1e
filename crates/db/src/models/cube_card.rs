//! Cube-card row model.
//!
//! The table stores a flattened subset of the catalog card plus the cube
//! metadata. [`CubeCardRow::into_cube_card`] rebuilds the domain
//! [`CubeCard`], decoding the JSON text columns through [`crate::codec`].

use std::collections::BTreeMap;

use cubekit_core::card::{Card, CubeCard, ImageUris};
use cubekit_core::types::{CardId, CubeId, Timestamp};
use sqlx::FromRow;

use crate::codec;

/// A row from the `cube_cards` table.
#[derive(Debug, Clone, FromRow)]
pub struct CubeCardRow {
    pub cube_id: CubeId,
    pub card_id: CardId,
    pub card_name: String,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub colors: Option<String>,
    pub color_identity: Option<String>,
    pub rarity: Option<String>,
    pub set_code: Option<String>,
    pub quantity: i64,
    pub notes: Option<String>,
    pub tags: Option<String>,
    pub image_uri: Option<String>,
    pub price_usd: Option<String>,
    pub printed_name: Option<String>,
    pub printed_type_line: Option<String>,
    pub printed_text: Option<String>,
    pub selected_printing: Option<String>,
    pub added_at: Timestamp,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl CubeCardRow {
    pub fn into_cube_card(self) -> CubeCard {
        let image_uri = non_empty(self.image_uri);
        let price_usd = non_empty(self.price_usd);

        let card = Card {
            id: self.card_id,
            name: self.card_name,
            mana_cost: non_empty(self.mana_cost),
            cmc: self.cmc,
            type_line: non_empty(self.type_line),
            oracle_text: non_empty(self.oracle_text),
            colors: codec::decode_list("colors", self.colors.as_deref()),
            color_identity: codec::decode_list("color_identity", self.color_identity.as_deref()),
            rarity: non_empty(self.rarity),
            set: non_empty(self.set_code),
            image_uris: image_uri.as_deref().map(ImageUris::single),
            prices: price_usd
                .as_ref()
                .map(|usd| BTreeMap::from([("usd".to_string(), Some(usd.clone()))])),
            printed_name: non_empty(self.printed_name),
            printed_type_line: non_empty(self.printed_type_line),
            printed_text: non_empty(self.printed_text),
            ..Card::default()
        };

        CubeCard {
            card,
            quantity: self.quantity,
            notes: self.notes.unwrap_or_default(),
            tags: codec::decode_list("tags", self.tags.as_deref()),
            selected_printing: codec::decode_printing(self.selected_printing.as_deref()).map(Box::new),
            image_uri,
            price_usd,
        }
    }
}
