//! Handlers for the `/cards` resource (catalog proxy).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use cubekit_core::card::Card;
use cubekit_core::validation::validate_search_query;

use crate::error::AppResult;
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/cards/search?q=&page=&include_japanese=
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<Vec<Card>>> {
    let Query(params) = params?;
    let query = validate_search_query(&params.q)?;

    let list = if params.include_japanese {
        state.catalog.search_localized(query, params.page).await?
    } else {
        state.catalog.search(query, params.page).await?
    };

    tracing::debug!(
        query,
        page = params.page,
        total_cards = list.total_cards,
        returned = list.data.len(),
        "Card search served"
    );
    Ok(Json(list.data))
}

/// GET /api/cards/random
pub async fn random(State(state): State<AppState>) -> AppResult<Json<Card>> {
    let card = state.catalog.random().await?;
    Ok(Json(card))
}

/// GET /api/cards/id/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Card>> {
    let card = state.catalog.get_by_id(&id).await?;
    Ok(Json(card))
}

/// GET /api/cards/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Card>> {
    let card = state.catalog.get_by_name(&name).await?;
    Ok(Json(card))
}

/// GET /api/cards/{name}/printings
pub async fn printings(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<Card>>> {
    let printings = state.catalog.get_printings(&name).await?;
    Ok(Json(printings))
}
