use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `category_articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryArticle {
    pub id: DbId,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CategoryArticleInput {
    pub category: String,
}
