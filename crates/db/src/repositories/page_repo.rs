//! Repository for the `pages` table.

use codetech_core::naming::title_slug;
use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{Page, PageInput};

const COLUMNS: &str = "id, title, slug, type, description, banner, created_at, updated_at";

/// Provides CRUD operations for content pages.
pub struct PageRepo;

impl PageRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY id");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &PageInput) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (title, slug, type, description, banner)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&input.title)
            .bind(title_slug(&input.title))
            .bind(&input.page_type)
            .bind(&input.description)
            .bind(&input.banner)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column, re-deriving the slug from the title.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PageInput,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET
                title = $2,
                slug = $3,
                type = $4,
                description = $5,
                banner = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(title_slug(&input.title))
            .bind(&input.page_type)
            .bind(&input.description)
            .bind(&input.banner)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
