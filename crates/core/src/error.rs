use crate::types::DbId;

/// Failures the domain layer can report without knowing about HTTP.
///
/// The API crate maps each variant to a status code; the message strings are
/// what clients see, so keep them short and free of internals.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with `id` in the table behind `entity`.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input that passed parsing but breaks a domain rule, e.g. a missing
    /// required upload.
    #[error("{0}")]
    Validation(String),

    /// Duplicate singleton row or duplicate unique value.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Disk write or delete failure in the asset store.
    #[error("Storage error: {0}")]
    Storage(String),
}
