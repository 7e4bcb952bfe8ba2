//! Repository for the `portfolios` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{Portfolio, PortfolioInput};

const COLUMNS: &str = "id, title, url, image, created_at, updated_at";

pub struct PortfolioRepo;

impl PortfolioRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios ORDER BY created_at DESC");
        sqlx::query_as::<_, Portfolio>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolios WHERE id = $1");
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &PortfolioInput) -> Result<Portfolio, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolios (title, url, image)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &PortfolioInput,
    ) -> Result<Option<Portfolio>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolios SET
                title = $2,
                url = $3,
                image = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Portfolio>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
