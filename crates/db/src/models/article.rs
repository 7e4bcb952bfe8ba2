//! Blog articles, authored by a user and filed under an article category.

use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub user_id: DbId,
    pub category_id: DbId,
    pub description: String,
    pub thumbnail: String,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Article joined with its author name and category label, as listed by the API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleListing {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub user_id: DbId,
    /// Author display name.
    pub user: String,
    pub category_id: DbId,
    /// Category label.
    pub category: String,
    pub description: String,
    pub thumbnail: String,
    pub views: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column values for inserting or replacing an article.
///
/// The slug is derived from `title` by the repository.
#[derive(Debug, Clone)]
pub struct ArticleInput {
    pub title: String,
    pub user_id: DbId,
    pub category_id: DbId,
    pub description: String,
    pub thumbnail: String,
}
