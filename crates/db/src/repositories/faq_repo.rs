//! Repository for the `faqs` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{Faq, FaqInput, FaqListing};

const COLUMNS: &str = "id, question, answer, category_id, created_at, updated_at";

pub struct FaqRepo;

impl FaqRepo {
    /// List FAQs with their category label.
    pub async fn list(pool: &PgPool) -> Result<Vec<FaqListing>, sqlx::Error> {
        sqlx::query_as::<_, FaqListing>(
            "SELECT f.id, f.question, f.answer, f.category_id, c.category,
                    f.created_at, f.updated_at
             FROM faqs f
             JOIN category_faqs c ON f.category_id = c.id
             ORDER BY f.id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = $1");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &FaqInput) -> Result<Faq, sqlx::Error> {
        let query = format!(
            "INSERT INTO faqs (question, answer, category_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FaqInput,
    ) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!(
            "UPDATE faqs SET
                question = $2,
                answer = $3,
                category_id = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
