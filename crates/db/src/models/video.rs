//! Video entity model.

use reelrank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full video row from the `videos` table.
///
/// `link` is always the normalized embed URL, never the raw submitted form.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Video {
    pub id: DbId,
    pub playlist_id: DbId,
    pub link: String,
    pub submitter_id: DbId,
    pub created_at: Timestamp,
}
