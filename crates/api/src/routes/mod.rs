pub mod cards;
pub mod cubes;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  service health
///
/// /cards/search                            search (?q=&page=&include_japanese=)
/// /cards/random                            random card
/// /cards/id/{id}                           lookup by catalog id
/// /cards/{name}                            lookup by name
/// /cards/{name}/printings                  all printings, oldest first
///
/// /cubes                                   list, create
/// /cubes/{cube_id}                         cards in cube
/// /cubes/{cube_id}/cards                   add or replace card (POST)
/// /cubes/{cube_id}/cards/{card_id}         remove card (DELETE)
/// /cubes/{cube_id}/analysis                cube statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/cards", cards::router())
        .nest("/cubes", cubes::router())
}
