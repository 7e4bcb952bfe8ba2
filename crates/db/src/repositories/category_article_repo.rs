//! Repository for the `category_articles` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::category_article::{CategoryArticle, CategoryArticleInput};

const COLUMNS: &str = "id, category, created_at, updated_at";

pub struct CategoryArticleRepo;

impl CategoryArticleRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_articles ORDER BY category");
        sqlx::query_as::<_, CategoryArticle>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_articles WHERE id = $1");
        sqlx::query_as::<_, CategoryArticle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CategoryArticleInput,
    ) -> Result<CategoryArticle, sqlx::Error> {
        let query = format!(
            "INSERT INTO category_articles (category) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryArticle>(&query)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryArticleInput,
    ) -> Result<Option<CategoryArticle>, sqlx::Error> {
        let query = format!(
            "UPDATE category_articles SET category = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryArticle>(&query)
            .bind(id)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Fails with a foreign-key violation while articles
    /// still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category_articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
