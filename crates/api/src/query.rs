//! Query parameter types for API handlers.

use serde::Deserialize;

fn default_page() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Card search parameters (`?q=&page=&include_japanese=`).
///
/// A missing `q` deserializes as empty and is rejected by the handler's
/// validation, so both cases produce the same error.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: u32,
    /// Overlay Japanese printed text onto results (default: `true`).
    #[serde(default = "default_true")]
    pub include_japanese: bool,
}
