//! Text codec for list-typed and nested columns.
//!
//! `colors`, `color_identity` and `tags` are stored as JSON arrays and
//! `selected_printing` as a JSON object (or NULL). Encoding happens only in
//! the repositories; reads go through the decoders here, which log and
//! degrade to an empty list / `None` instead of failing the whole read.

use cubekit_core::card::Card;

/// Encode a string list as JSON text.
pub fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to encode list column, storing empty list");
        "[]".to_string()
    })
}

/// Decode a JSON list column. NULL, empty text and malformed JSON all
/// decode to an empty list.
pub fn decode_list(column: &'static str, raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(column, error = %e, "Failed to decode list column, treating as empty");
            Vec::new()
        }
    }
}

/// Encode an optional selected printing as JSON text.
pub fn encode_printing(printing: Option<&Card>) -> Option<String> {
    let printing = printing?;
    match serde_json::to_string(printing) {
        Ok(text) => Some(text),
        Err(e) => {
            tracing::warn!(card_id = %printing.id, error = %e, "Failed to encode selected printing, storing NULL");
            None
        }
    }
}

/// Decode a selected-printing column. NULL, empty text and malformed JSON
/// all decode to `None`.
pub fn decode_printing(raw: Option<&str>) -> Option<Card> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;

    match serde_json::from_str::<Card>(raw) {
        Ok(card) => Some(card),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode selected_printing, treating as absent");
            None
        }
    }
}
