//! Repository for the `videos` table.

use reelrank_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::Video;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, playlist_id, link, submitter_id, created_at";

/// Provides operations for playlist videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Find a video by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos of a playlist in submission order.
    pub async fn list_by_playlist(
        pool: &PgPool,
        playlist_id: DbId,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE playlist_id = $1 ORDER BY id");
        sqlx::query_as::<_, Video>(&query)
            .bind(playlist_id)
            .fetch_all(pool)
            .await
    }

    /// List one user's submissions to a playlist in submission order.
    pub async fn list_by_playlist_and_submitter(
        pool: &PgPool,
        playlist_id: DbId,
        submitter_id: DbId,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE playlist_id = $1 AND submitter_id = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(playlist_id)
            .bind(submitter_id)
            .fetch_all(pool)
            .await
    }

    /// Replace one user's submissions to a playlist with a new set of links.
    ///
    /// Deletes the user's existing rows (and, via cascade, any scores on
    /// them) and inserts the new links, all in one transaction. Links must
    /// already be normalized.
    pub async fn replace_submissions(
        pool: &PgPool,
        playlist_id: DbId,
        submitter_id: DbId,
        links: &[String],
    ) -> Result<Vec<Video>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM videos WHERE playlist_id = $1 AND submitter_id = $2")
            .bind(playlist_id)
            .bind(submitter_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO videos (playlist_id, link, submitter_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(links.len());
        for link in links {
            let video = sqlx::query_as::<_, Video>(&insert)
                .bind(playlist_id)
                .bind(link)
                .bind(submitter_id)
                .fetch_one(&mut *tx)
                .await?;
            created.push(video);
        }

        tx.commit().await?;
        Ok(created)
    }
}
