//! Route definitions for the `/cards` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Routes mounted at `/cards`.
///
/// ```text
/// GET    /search                 -> search
/// GET    /random                 -> random
/// GET    /id/{id}                -> get_by_id
/// GET    /{name}                 -> get_by_name
/// GET    /{name}/printings       -> printings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", get(cards::search))
        .route("/random", get(cards::random))
        .route("/id/{id}", get(cards::get_by_id))
        .route("/{name}", get(cards::get_by_name))
        .route("/{name}/printings", get(cards::printings))
}
