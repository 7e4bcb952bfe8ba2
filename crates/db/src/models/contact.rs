//! Company contact details. At most one row exists.

use codetech_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Free-form opening hours, e.g. `"Mon-Fri 9-5"`.
    pub office_operation: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct ContactInput {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub office_operation: String,
}
