//! Handlers for the `/playlists` resource, including contributor management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reelrank_core::error::CoreError;
use reelrank_core::types::DbId;
use reelrank_core::validation::validate_playlist_input;
use reelrank_db::models::playlist::{CreatePlaylist, Playlist};
use reelrank_db::repositories::{ContributorRepo, PlaylistRepo, UserRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /playlists`.
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub video_limit: i32,
    /// When false, the owner's own scores are excluded from averages.
    #[serde(default = "default_owner_vote_counts")]
    pub owner_vote_counts: bool,
}

fn default_owner_vote_counts() -> bool {
    true
}

/// Request body for `POST /playlists/{id}/contributors`.
#[derive(Debug, Deserialize)]
pub struct GrantContributorRequest {
    pub username: String,
}

// ---------------------------------------------------------------------------
// Playlist handlers
// ---------------------------------------------------------------------------

/// GET /api/playlists/all
///
/// List every playlist, newest first.
pub async fn list_all(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let playlists = PlaylistRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: playlists }))
}

/// GET /api/playlists/{id}
///
/// Get a single playlist by ID.
pub async fn get(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let playlist = find_playlist(&state, id).await?;
    Ok(Json(DataResponse { data: playlist }))
}

/// POST /api/playlists
///
/// Create a playlist owned by the caller.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePlaylistRequest>,
) -> AppResult<impl IntoResponse> {
    validate_playlist_input(&input.name, input.video_limit)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let create = CreatePlaylist {
        name: input.name.trim().to_string(),
        video_limit: input.video_limit,
        owner_vote_counts: input.owner_vote_counts,
        owner_id: auth.user_id,
    };
    let playlist = PlaylistRepo::create(&state.pool, &create).await?;

    tracing::info!(
        user_id = auth.user_id,
        playlist_id = playlist.id,
        "Playlist created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: playlist })))
}

/// DELETE /api/playlists/{id}
///
/// Delete a playlist. Owner only. Cascades to videos, scores, and
/// contributor grants.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let playlist = find_playlist(&state, id).await?;
    require_owner(&playlist, auth.user_id)?;

    PlaylistRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = auth.user_id, playlist_id = id, "Playlist deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Contributor handlers
// ---------------------------------------------------------------------------

/// GET /api/playlists/{id}/contributors
///
/// List the users permitted to submit videos to the playlist. The owner is
/// not listed; ownership already implies permission.
pub async fn list_contributors(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown playlists rather than an empty list.
    find_playlist(&state, id).await?;

    let contributors = ContributorRepo::list_by_playlist(&state.pool, id).await?;
    Ok(Json(DataResponse { data: contributors }))
}

/// POST /api/playlists/{id}/contributors
///
/// Grant a user (by username) permission to submit to the playlist.
/// Owner only.
pub async fn grant_contributor(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GrantContributorRequest>,
) -> AppResult<StatusCode> {
    let playlist = find_playlist(&state, id).await?;
    require_owner(&playlist, auth.user_id)?;

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user named '{}'", input.username)))?;

    if user.id == playlist.owner_id {
        return Err(AppError::Core(CoreError::Validation(
            "The owner can always submit videos".into(),
        )));
    }

    if ContributorRepo::exists(&state.pool, id, user.id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "'{}' is already a contributor",
            input.username
        ))));
    }

    ContributorRepo::grant(&state.pool, id, user.id).await?;

    tracing::info!(
        playlist_id = id,
        contributor_id = user.id,
        granted_by = auth.user_id,
        "Contributor granted"
    );

    Ok(StatusCode::CREATED)
}

/// DELETE /api/playlists/{id}/contributors/{user_id}
///
/// Revoke a contributor grant. Owner only.
pub async fn revoke_contributor(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let playlist = find_playlist(&state, id).await?;
    require_owner(&playlist, auth.user_id)?;

    let removed = ContributorRepo::revoke(&state.pool, id, user_id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contributor",
            id: user_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a playlist or fail with 404.
pub(crate) async fn find_playlist(state: &AppState, id: DbId) -> AppResult<Playlist> {
    PlaylistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Playlist",
                id,
            })
        })
}

/// Fail with 403 unless `user_id` owns the playlist.
fn require_owner(playlist: &Playlist, user_id: DbId) -> AppResult<()> {
    if playlist.owner_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the playlist owner may do this".into(),
        )));
    }
    Ok(())
}
