//! Domain errors shared across the ReelRank crates.
//!
//! Handlers wrap these in the API layer's error type, which decides the
//! HTTP status: `NotFound` becomes 404, `Validation` 400, `Conflict` 409,
//! and so on.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A playlist, video, user, or score looked up by id does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain rule, such as a score outside 1..=11 or a
    /// video link in an unaccepted form.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is authenticated but not permitted, such as a
    /// non-owner deleting a playlist.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
