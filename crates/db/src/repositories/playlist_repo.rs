//! Repository for the `playlists` table.

use reelrank_core::types::DbId;
use sqlx::PgPool;

use crate::models::playlist::{CreatePlaylist, Playlist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, video_limit, owner_vote_counts, owner_id, created_at, updated_at";

/// Provides CRUD operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (name, video_limit, owner_vote_counts, owner_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(input.video_limit)
            .bind(input.owner_vote_counts)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a playlist by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all playlists ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }

    /// Delete a playlist. Cascades to its videos, their scores, and the
    /// contributor grants via foreign keys.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
