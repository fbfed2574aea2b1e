//! Handlers for the `/cubes` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cubekit_core::analysis::{analyze_cube, CubeAnalysis};
use cubekit_core::card::CubeCard;
use cubekit_core::error::CoreError;
use cubekit_db::models::cube::{CreateCube, Cube, CubeSummary};
use cubekit_db::repositories::{CubeCardRepo, CubeRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/cubes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CubeSummary>>> {
    let cubes = CubeRepo::list(&state.pool).await?;
    Ok(Json(cubes))
}

/// POST /api/cubes
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateCube>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Cube>)> {
    let Json(input) = payload?;
    let cube = CubeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cube)))
}

/// GET /api/cubes/{cube_id}
///
/// An unknown cube id yields an empty list.
pub async fn list_cards(
    State(state): State<AppState>,
    Path(cube_id): Path<String>,
) -> AppResult<Json<Vec<CubeCard>>> {
    let cards = CubeCardRepo::list_for_cube(&state.pool, &cube_id).await?;
    Ok(Json(cards))
}

/// POST /api/cubes/{cube_id}/cards
pub async fn add_card(
    State(state): State<AppState>,
    Path(cube_id): Path<String>,
    payload: Result<Json<CubeCard>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(input) = payload?;
    CubeCardRepo::upsert(&state.pool, &cube_id, &input).await?;
    tracing::info!(cube_id = %cube_id, card = %input.card.name, quantity = input.quantity, "Card saved to cube");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Card added to cube")),
    ))
}

/// DELETE /api/cubes/{cube_id}/cards/{card_id}
pub async fn remove_card(
    State(state): State<AppState>,
    Path((cube_id, card_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    let removed = CubeCardRepo::remove(&state.pool, &cube_id, &card_id).await?;
    if removed {
        tracing::info!(cube_id = %cube_id, card_id = %card_id, "Card removed from cube");
        Ok(Json(MessageResponse::new("Card removed from cube")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: card_id,
        }))
    }
}

/// GET /api/cubes/{cube_id}/analysis
pub async fn analysis(
    State(state): State<AppState>,
    Path(cube_id): Path<String>,
) -> AppResult<Json<CubeAnalysis>> {
    let cards = CubeCardRepo::list_for_cube(&state.pool, &cube_id).await?;
    Ok(Json(analyze_cube(&cards)))
}
