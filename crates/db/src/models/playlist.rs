//! Playlist entity model and DTOs.

use reelrank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full playlist row from the `playlists` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    /// Maximum number of videos a single user may have submitted at once.
    pub video_limit: i32,
    /// When false, the owner's own scores are excluded from averages.
    pub owner_vote_counts: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new playlist.
#[derive(Debug)]
pub struct CreatePlaylist {
    pub name: String,
    pub video_limit: i32,
    pub owner_vote_counts: bool,
    pub owner_id: DbId,
}
