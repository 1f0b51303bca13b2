//! Score entity model and DTOs.

use reelrank_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full score row from the `scores` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Score {
    pub id: DbId,
    pub video_id: DbId,
    pub user_id: DbId,
    /// Whole number from 1 to 11 (enforced by a CHECK constraint).
    pub score: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Score row joined with the scorer's username, for per-video listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ScoreWithUser {
    pub id: DbId,
    pub video_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub score: i32,
    pub comment: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for submitting (or overwriting) a score.
#[derive(Debug)]
pub struct UpsertScore {
    pub video_id: DbId,
    pub user_id: DbId,
    pub score: i32,
    pub comment: Option<String>,
}

/// One ranking entry: a video of a playlist with its aggregated score.
///
/// `average_score` is `None` for videos nobody has scored yet (after owner
/// exclusion, where it applies).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VideoRanking {
    pub video_id: DbId,
    pub link: String,
    pub submitter_id: DbId,
    pub average_score: Option<f64>,
    pub score_count: i64,
}
