use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// FAQ joined with its category label.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqListing {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category_id: DbId,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
    pub category_id: DbId,
}
