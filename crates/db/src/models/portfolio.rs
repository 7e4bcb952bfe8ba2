use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `portfolios` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Portfolio {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct PortfolioInput {
    pub title: String,
    pub url: String,
    pub image: String,
}
