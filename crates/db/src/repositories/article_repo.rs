//! Repository for the `articles` table.

use codetech_core::naming::title_slug;
use codetech_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleInput, ArticleListing};

const COLUMNS: &str = "id, title, slug, user_id, category_id, description, thumbnail, views, \
                       created_at, updated_at";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List articles with author name and category label, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArticleListing>, sqlx::Error> {
        sqlx::query_as::<_, ArticleListing>(
            "SELECT a.id, a.title, a.slug, a.user_id, u.name AS \"user\", a.category_id,
                    c.category, a.description, a.thumbnail, a.views, a.created_at, a.updated_at
             FROM articles a
             JOIN users u ON a.user_id = u.id
             JOIN category_articles c ON a.category_id = c.id
             ORDER BY a.created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new article, returning the created row.
    pub async fn create(pool: &PgPool, input: &ArticleInput) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, slug, user_id, category_id, description, thumbnail)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(title_slug(&input.title))
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .fetch_one(pool)
            .await
    }

    /// Replace every mutable column. The view counter is left alone.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArticleInput,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2,
                slug = $3,
                user_id = $4,
                category_id = $5,
                description = $6,
                thumbnail = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(title_slug(&input.title))
            .bind(input.user_id)
            .bind(input.category_id)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bump the view counter of the article with this slug.
    ///
    /// Returns `false` when no article carries the slug.
    pub async fn increment_views(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE articles SET views = views + 1 WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
