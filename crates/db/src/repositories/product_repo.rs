//! Repository for the `products` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{Product, ProductInput};

const COLUMNS: &str =
    "id, title, description, price, discount, type, icon, created_at, updated_at";

pub struct ProductRepo;

impl ProductRepo {
    /// List products, cheapest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY price, id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (title, description, price, discount, type, icon)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.discount)
            .bind(&input.product_type)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                title = $2,
                description = $3,
                price = $4,
                discount = $5,
                type = $6,
                icon = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.discount)
            .bind(&input.product_type)
            .bind(&input.icon)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
