//! Repository for the `category_faqs` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::category_faq::{CategoryFaq, CategoryFaqInput};

const COLUMNS: &str = "id, category, description, icon, created_at, updated_at";

pub struct CategoryFaqRepo;

impl CategoryFaqRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryFaq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_faqs ORDER BY category");
        sqlx::query_as::<_, CategoryFaq>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CategoryFaq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_faqs WHERE id = $1");
        sqlx::query_as::<_, CategoryFaq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(
        pool: &PgPool,
        input: &CategoryFaqInput,
    ) -> Result<CategoryFaq, sqlx::Error> {
        let query = format!(
            "INSERT INTO category_faqs (category, description, icon)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryFaq>(&query)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CategoryFaqInput,
    ) -> Result<Option<CategoryFaq>, sqlx::Error> {
        let query = format!(
            "UPDATE category_faqs SET
                category = $2,
                description = $3,
                icon = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CategoryFaq>(&query)
            .bind(id)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM category_faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
