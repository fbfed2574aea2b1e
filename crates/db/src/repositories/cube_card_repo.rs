//! Repository for the `cube_cards` table.

use chrono::Utc;
use cubekit_core::card::CubeCard;
use cubekit_core::error::CoreError;
use cubekit_core::validation::validate_cube_card;
use sqlx::SqlitePool;

use crate::codec;
use crate::error::StoreError;
use crate::models::cube_card::CubeCardRow;
use crate::repositories::CubeRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "cube_id, card_id, card_name, mana_cost, cmc, type_line, oracle_text, \
     colors, color_identity, rarity, set_code, quantity, notes, tags, image_uri, price_usd, \
     printed_name, printed_type_line, printed_text, selected_printing, added_at";

/// Write transactions take the database write lock up front. A deferred
/// transaction that reads before writing cannot wait out a competing writer
/// and fails with `SQLITE_BUSY` instead.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Provides read, upsert and delete operations for the cards of a cube.
pub struct CubeCardRepo;

impl CubeCardRepo {
    /// All cards in a cube ordered by card name. An unknown cube yields an
    /// empty list.
    pub async fn list_for_cube(pool: &SqlitePool, cube_id: &str) -> Result<Vec<CubeCard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cube_cards \
             WHERE cube_id = ? \
             ORDER BY card_name, card_id"
        );
        let rows = sqlx::query_as::<_, CubeCardRow>(&query)
            .bind(cube_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(CubeCardRow::into_cube_card).collect())
    }

    /// Insert a card into a cube, or fully replace the existing row for the
    /// same `(cube_id, card_id)` pair.
    ///
    /// Fails with `NotFound` when the cube does not exist.
    pub async fn upsert(pool: &SqlitePool, cube_id: &str, input: &CubeCard) -> Result<(), StoreError> {
        validate_cube_card(input)?;

        let mut tx = pool.begin_with(BEGIN_WRITE).await?;

        if !CubeRepo::exists(&mut *tx, cube_id).await? {
            return Err(CoreError::NotFound {
                entity: "Cube",
                id: cube_id.to_string(),
            }
            .into());
        }

        let card = &input.card;
        let query = format!(
            "INSERT OR REPLACE INTO cube_cards ({COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        );
        sqlx::query(&query)
            .bind(cube_id)
            .bind(&card.id)
            .bind(&card.name)
            .bind(&card.mana_cost)
            .bind(card.cmc.unwrap_or(0.0))
            .bind(&card.type_line)
            .bind(&card.oracle_text)
            .bind(codec::encode_list(&card.colors))
            .bind(codec::encode_list(&card.color_identity))
            .bind(&card.rarity)
            .bind(&card.set)
            .bind(input.quantity)
            .bind(&input.notes)
            .bind(codec::encode_list(&input.tags))
            .bind(input.storage_image_uri())
            .bind(input.storage_price_usd())
            .bind(&card.printed_name)
            .bind(&card.printed_type_line)
            .bind(&card.printed_text)
            .bind(codec::encode_printing(input.selected_printing.as_deref()))
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;

        CubeRepo::touch(&mut *tx, cube_id).await?;
        tx.commit().await?;

        tracing::debug!(cube_id, card_id = %card.id, quantity = input.quantity, "Card upserted into cube");
        Ok(())
    }

    /// Delete a card from a cube.
    ///
    /// Returns `false` when no row matched.
    pub async fn remove(pool: &SqlitePool, cube_id: &str, card_id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin_with(BEGIN_WRITE).await?;

        let result = sqlx::query("DELETE FROM cube_cards WHERE cube_id = ? AND card_id = ?")
            .bind(cube_id)
            .bind(card_id)
            .execute(&mut *tx)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            CubeRepo::touch(&mut *tx, cube_id).await?;
        }
        tx.commit().await?;

        Ok(removed)
    }
}
