//! Repository for the `playlist_contributors` relation.

use reelrank_core::types::DbId;
use sqlx::PgPool;

use crate::models::contributor::Contributor;

/// Provides contributor-permission lookups and management.
pub struct ContributorRepo;

impl ContributorRepo {
    /// Grant a user permission to submit videos to a playlist.
    ///
    /// Fails with a primary-key violation when the grant already exists.
    pub async fn grant(
        pool: &PgPool,
        playlist_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO playlist_contributors (playlist_id, user_id) VALUES ($1, $2)")
            .bind(playlist_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Revoke a contributor grant. Returns `true` if a grant was removed.
    pub async fn revoke(
        pool: &PgPool,
        playlist_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM playlist_contributors WHERE playlist_id = $1 AND user_id = $2",
        )
        .bind(playlist_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a grant exists for the given user and playlist.
    pub async fn exists(
        pool: &PgPool,
        playlist_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM playlist_contributors WHERE playlist_id = $1 AND user_id = $2",
        )
        .bind(playlist_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
        Ok(row.is_some())
    }

    /// List the contributors of a playlist with usernames, oldest grant first.
    pub async fn list_by_playlist(
        pool: &PgPool,
        playlist_id: DbId,
    ) -> Result<Vec<Contributor>, sqlx::Error> {
        sqlx::query_as::<_, Contributor>(
            "SELECT pc.playlist_id, pc.user_id, u.username, pc.granted_at
             FROM playlist_contributors pc
             JOIN users u ON u.id = pc.user_id
             WHERE pc.playlist_id = $1
             ORDER BY pc.granted_at, pc.user_id",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await
    }
}
