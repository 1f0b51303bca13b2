//! Repository for the `scores` table, including the ranking aggregation.

use reelrank_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{Score, ScoreWithUser, UpsertScore, VideoRanking};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, user_id, score, comment, created_at, updated_at";

/// Provides score persistence and playlist ranking aggregation.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert or overwrite the user's score for a video.
    ///
    /// Relies on the `uq_scores_video_user` constraint: re-submitting updates
    /// the existing row in place, so a user never holds two scores for the
    /// same video.
    pub async fn upsert(pool: &PgPool, input: &UpsertScore) -> Result<Score, sqlx::Error> {
        let query = format!(
            "INSERT INTO scores (video_id, user_id, score, comment)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_scores_video_user
             DO UPDATE SET score = EXCLUDED.score,
                           comment = EXCLUDED.comment,
                           updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(input.video_id)
            .bind(input.user_id)
            .bind(input.score)
            .bind(&input.comment)
            .fetch_one(pool)
            .await
    }

    /// List all scores for a video with scorer usernames, newest update first.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<ScoreWithUser>, sqlx::Error> {
        sqlx::query_as::<_, ScoreWithUser>(
            "SELECT s.id, s.video_id, s.user_id, u.username, s.score, s.comment, s.updated_at
             FROM scores s
             JOIN users u ON u.id = s.user_id
             WHERE s.video_id = $1
             ORDER BY s.updated_at DESC, s.id DESC",
        )
        .bind(video_id)
        .fetch_all(pool)
        .await
    }

    /// List one user's scores across a playlist, in video order.
    pub async fn list_by_playlist_and_user(
        pool: &PgPool,
        playlist_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<Score>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scores
             WHERE user_id = $2
               AND video_id IN (SELECT id FROM videos WHERE playlist_id = $1)
             ORDER BY video_id"
        );
        sqlx::query_as::<_, Score>(&query)
            .bind(playlist_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Compute the ranking for a playlist: one entry per video with the
    /// average score and vote count, best average first (unscored videos
    /// last).
    ///
    /// When `owner_vote_counts` is false, scores cast by `owner_id` are
    /// excluded from both the average and the count.
    pub async fn playlist_ranking(
        pool: &PgPool,
        playlist_id: DbId,
        owner_id: DbId,
        owner_vote_counts: bool,
    ) -> Result<Vec<VideoRanking>, sqlx::Error> {
        sqlx::query_as::<_, VideoRanking>(
            "SELECT v.id AS video_id,
                    v.link,
                    v.submitter_id,
                    AVG(s.score)::DOUBLE PRECISION AS average_score,
                    COUNT(s.id) AS score_count
             FROM videos v
             LEFT JOIN scores s
               ON s.video_id = v.id
              AND ($3 OR s.user_id <> $2)
             WHERE v.playlist_id = $1
             GROUP BY v.id, v.link, v.submitter_id
             ORDER BY average_score DESC NULLS LAST, v.id",
        )
        .bind(playlist_id)
        .bind(owner_id)
        .bind(owner_vote_counts)
        .fetch_all(pool)
        .await
    }
}
