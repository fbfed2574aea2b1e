use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cubekit_catalog::{CatalogError, SearchError};
use cubekit_core::error::CoreError;
use cubekit_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cubekit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A card catalog error.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// A request the extractors could not parse (malformed JSON body or
    /// query string).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            StoreError::Database(db) => AppError::Database(db),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Catalog errors ---
            AppError::Search(err) => classify_search_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Classify a catalog error.
///
/// - Unknown cards map to 404.
/// - Upstream and transport failures map to 502; the upstream detail is
///   logged, not returned. A failed search names the attempted query.
fn classify_search_error(err: &SearchError) -> (StatusCode, &'static str, String) {
    match err {
        SearchError::CardNotFound { query, .. } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Card not found: {query}"),
        ),
        SearchError::Catalog(CatalogError::NotFound) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Card not found".to_string(),
        ),
        // Display names the query and the candidates tried, not the source.
        SearchError::Unavailable { query, source, .. } => {
            tracing::warn!(query = %query, error = %source, "Card catalog unavailable");
            (StatusCode::BAD_GATEWAY, "CATALOG_UNAVAILABLE", err.to_string())
        }
        SearchError::Catalog(source) => {
            tracing::warn!(error = %source, "Card catalog request failed");
            (
                StatusCode::BAD_GATEWAY,
                "CATALOG_UNAVAILABLE",
                "The card catalog is currently unavailable".to_string(),
            )
        }
    }
}
