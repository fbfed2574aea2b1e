//! Cube entity model and DTOs.

use cubekit_core::types::{CubeId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cubes` table. Serialized in camelCase, like
/// [`CubeSummary`].
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cube {
    pub id: CubeId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A cube with the number of distinct cards it holds.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeSummary {
    pub id: CubeId,
    pub name: String,
    pub description: String,
    pub card_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cube.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCube {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}
