//! Input validation shared by the store and the HTTP layer.

use crate::card::CubeCard;
use crate::error::CoreError;

/// Maximum length of a cube name, in characters.
pub const MAX_CUBE_NAME_LEN: usize = 200;

/// Validate a cube name, returning it trimmed.
pub fn validate_cube_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Cube name is required".to_string()));
    }
    if trimmed.chars().count() > MAX_CUBE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Cube name must be at most {MAX_CUBE_NAME_LEN} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a card before it is written into a cube.
pub fn validate_cube_card(cube_card: &CubeCard) -> Result<(), CoreError> {
    if cube_card.card.id.trim().is_empty() {
        return Err(CoreError::Validation("Card id is required".to_string()));
    }
    if cube_card.card.name.trim().is_empty() {
        return Err(CoreError::Validation("Card name is required".to_string()));
    }
    if cube_card.quantity < 1 {
        return Err(CoreError::Validation(format!(
            "Quantity must be a positive integer, got {}",
            cube_card.quantity
        )));
    }
    Ok(())
}

/// Validate a catalog search query, returning it trimmed.
///
/// Empty and whitespace-only queries are rejected here so they never reach
/// the catalog.
pub fn validate_search_query(query: &str) -> Result<&str, CoreError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Query parameter \"q\" is required".to_string(),
        ));
    }
    Ok(trimmed)
}
