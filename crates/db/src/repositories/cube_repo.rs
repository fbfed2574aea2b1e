//! Repository for the `cubes` table.

use chrono::Utc;
use cubekit_core::validation::validate_cube_name;
use sqlx::{Executor, Sqlite, SqlitePool};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::cube::{CreateCube, Cube, CubeSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Summary projection: cube columns plus the distinct card-row count.
const SUMMARY_SELECT: &str = "SELECT c.id, c.name, c.description, c.created_at, c.updated_at, \
        COUNT(cc.id) AS card_count \
     FROM cubes c \
     LEFT JOIN cube_cards cc ON cc.cube_id = c.id";

/// Provides create and list operations for cubes.
pub struct CubeRepo;

impl CubeRepo {
    /// Validate and insert a new cube with a fresh UUID, returning the row.
    pub async fn create(pool: &SqlitePool, input: &CreateCube) -> Result<Cube, StoreError> {
        let name = validate_cube_name(&input.name)?;
        let description = input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let query = format!(
            "INSERT INTO cubes (id, name, description, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let cube = sqlx::query_as::<_, Cube>(&query)
            .bind(&id)
            .bind(&name)
            .bind(description)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await?;

        tracing::info!(cube_id = %cube.id, name = %cube.name, "Cube created");
        Ok(cube)
    }

    /// List all cubes with their card counts, most recently updated first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<CubeSummary>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             GROUP BY c.id \
             ORDER BY c.updated_at DESC, c.created_at DESC, c.rowid DESC"
        );
        sqlx::query_as::<_, CubeSummary>(&query).fetch_all(pool).await
    }

    /// Whether a cube with `id` exists.
    pub async fn exists<'e, E>(executor: E, id: &str) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM cubes WHERE id = ?")
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(found.is_some())
    }

    /// Bump `updated_at` after the cube's contents changed.
    pub async fn touch<'e, E>(executor: E, id: &str) -> Result<(), sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query("UPDATE cubes SET updated_at = ? WHERE id = ?")
            .bind(Utc::now())
            .bind(id)
            .execute(executor)
            .await?;
        Ok(())
    }
}
