//! Contributor-permission relation model.

use reelrank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A contributor grant joined with the contributor's username.
///
/// The playlist owner never appears here; ownership already implies
/// permission to submit.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Contributor {
    pub playlist_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub granted_at: Timestamp,
}
