use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub page_type: String,
    pub description: String,
    pub banner: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column values for inserting or replacing a page. The slug follows `title`.
#[derive(Debug, Clone)]
pub struct PageInput {
    pub title: String,
    pub page_type: String,
    pub description: String,
    pub banner: String,
}
