//! Repository for the singleton `contacts` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::contact::{Contact, ContactInput};

const COLUMNS: &str = "id, phone, email, address, office_operation, created_at, updated_at";

/// Provides CRUD operations for the contact details.
pub struct ContactRepo;

impl ContactRepo {
    /// Fetch the contact row, if one has been created.
    pub async fn find_first(pool: &PgPool) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Contact>(&query)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert the contact row unless one already exists.
    ///
    /// Returns `None` when a row was already present.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &ContactInput,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (phone, email, address, office_operation)
             SELECT $1, $2, $3, $4
             WHERE NOT EXISTS (SELECT 1 FROM contacts)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.office_operation)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable column. Returns `None` if no row has this id.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ContactInput,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET
                phone = $2,
                email = $3,
                address = $4,
                office_operation = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.address)
            .bind(&input.office_operation)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
