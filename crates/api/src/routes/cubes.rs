//! Route definitions for the `/cubes` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::cubes;
use crate::state::AppState;

/// Routes mounted at `/cubes`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{cube_id}                       -> list_cards
/// POST   /{cube_id}/cards                 -> add_card
/// DELETE /{cube_id}/cards/{card_id}       -> remove_card
/// GET    /{cube_id}/analysis              -> analysis
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cubes::list).post(cubes::create))
        .route("/{cube_id}", get(cubes::list_cards))
        .route("/{cube_id}/cards", post(cubes::add_card))
        .route("/{cube_id}/cards/{card_id}", delete(cubes::remove_card))
        .route("/{cube_id}/analysis", get(cubes::analysis))
}
