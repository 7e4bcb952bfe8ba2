//! Company "about" section. At most one row exists.

use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `abouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct About {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Asset reference (`/uploads/...`).
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Column values for inserting or replacing the about row.
#[derive(Debug, Clone)]
pub struct AboutInput {
    pub title: String,
    pub description: String,
    pub image: String,
}
