//! Repository for the `users` table.

use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User, UserResponse};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password, profile, role, created_at, updated_at";

/// Columns safe to return to API clients (no password hash).
const PUBLIC_COLUMNS: &str = "id, name, email, profile, role, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, password, profile, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.profile)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the public projection of a user by internal ID.
    pub async fn find_response_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserResponse>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether `email` belongs to any user other than `except_id`.
    ///
    /// Pass `None` to check against every user.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        except_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM users WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(email)
        .bind(except_id)
        .fetch_one(pool)
        .await
    }

    /// List all users in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, UserResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// List users whose role is not one of `roles`.
    pub async fn list_excluding_roles(
        pool: &PgPool,
        roles: &[&str],
    ) -> Result<Vec<UserResponse>, sqlx::Error> {
        let roles: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE role <> ALL($1) ORDER BY id");
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(roles)
            .fetch_all(pool)
            .await
    }

    /// Replace a user's profile columns; the password hash changes only when
    /// `input.password_hash` is set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                name = $2,
                email = $3,
                profile = $4,
                role = $5,
                password = COALESCE($6, password),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.profile)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
