//! Products on the pricing page.
//!
//! Money columns are integer minor units.

use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub discount: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub product_type: String,
    /// Optional asset; empty when no icon was uploaded.
    pub icon: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct ProductInput {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub discount: i64,
    pub product_type: String,
    pub icon: String,
}
