//! Repository for the singleton `abouts` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::about::{About, AboutInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, image, created_at, updated_at";

/// Provides CRUD operations for the about section.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the about row, if one has been created.
    pub async fn find_first(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM abouts ORDER BY id LIMIT 1");
        sqlx::query_as::<_, About>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM abouts WHERE id = $1");
        sqlx::query_as::<_, About>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the singleton row already exists.
    pub async fn exists(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM abouts)")
            .fetch_one(pool)
            .await
    }

    /// Insert the about row unless one already exists.
    ///
    /// Returns `None` when a row was already present. Concurrent inserts that
    /// both pass the `NOT EXISTS` guard are stopped by `uq_abouts_singleton`.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &AboutInput,
    ) -> Result<Option<About>, sqlx::Error> {
        let query = format!(
            "INSERT INTO abouts (title, description, image)
             SELECT $1, $2, $3
             WHERE NOT EXISTS (SELECT 1 FROM abouts)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable column. Returns `None` if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &AboutInput,
    ) -> Result<Option<About>, sqlx::Error> {
        let query = format!(
            "UPDATE abouts SET
                title = $2,
                description = $3,
                image = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete the row. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM abouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
