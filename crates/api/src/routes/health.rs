//! Liveness endpoint, served at `/health` and `/api/health`.
//!
//! Always answers 200. A database that does not answer `SELECT 1` within
//! [`DB_PING_TIMEOUT`] turns the status to `degraded`.

use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use cubekit_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

pub const DB_PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    /// Server crate version.
    pub version: &'static str,
    pub db_healthy: bool,
    pub timestamp: Timestamp,
}

impl HealthResponse {
    fn from_db(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { HealthStatus::Ok } else { HealthStatus::Degraded },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            timestamp: chrono::Utc::now(),
        }
    }
}

async fn ping_db(pool: &cubekit_db::DbPool) -> bool {
    match tokio::time::timeout(DB_PING_TIMEOUT, cubekit_db::health_check(pool)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
        Err(_) => {
            tracing::warn!(timeout = ?DB_PING_TIMEOUT, "Health check: database ping timed out");
            false
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_db(ping_db(&state.pool).await))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
