use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `category_faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryFaq {
    pub id: DbId,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CategoryFaqInput {
    pub category: String,
    pub description: String,
    pub icon: String,
}
