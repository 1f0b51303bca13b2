//! Handlers for the `/videos` resource.
//!
//! Submissions are replace-on-write: a user's POST replaces their whole set
//! of videos for the playlist, so re-submitting is how links are edited.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use reelrank_core::error::CoreError;
use reelrank_core::types::DbId;
use reelrank_core::video_link::normalize_link;
use reelrank_db::models::playlist::Playlist;
use reelrank_db::repositories::{ContributorRepo, VideoRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::playlists::find_playlist;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /videos/{playlist_id}`.
#[derive(Debug, Deserialize)]
pub struct SubmitVideosRequest {
    pub links: Vec<String>,
}

/// GET /api/videos/{playlist_id}
///
/// List all videos of a playlist.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_playlist(&state, playlist_id).await?;

    let videos = VideoRepo::list_by_playlist(&state.pool, playlist_id).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// GET /api/videos/my-submissions/{playlist_id}
///
/// List the caller's own submissions to a playlist.
pub async fn my_submissions(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_playlist(&state, playlist_id).await?;

    let videos =
        VideoRepo::list_by_playlist_and_submitter(&state.pool, playlist_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// POST /api/videos/{playlist_id}
///
/// Replace the caller's submissions for the playlist with the given links.
/// Caller must be the owner or a contributor; the set may not exceed the
/// playlist's video limit; every link must be an accepted YouTube or Google
/// Drive form (stored normalized to its embed URL).
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<DbId>,
    Json(input): Json<SubmitVideosRequest>,
) -> AppResult<impl IntoResponse> {
    let playlist = find_playlist(&state, playlist_id).await?;

    require_can_contribute(&state, &playlist, auth.user_id).await?;

    if input.links.len() > playlist.video_limit as usize {
        return Err(AppError::Core(CoreError::Validation(format!(
            "At most {} videos per user on this playlist",
            playlist.video_limit
        ))));
    }

    let mut links = Vec::with_capacity(input.links.len());
    for link in &input.links {
        let normalized =
            normalize_link(link).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        links.push(normalized);
    }

    let videos =
        VideoRepo::replace_submissions(&state.pool, playlist_id, auth.user_id, &links).await?;

    tracing::info!(
        user_id = auth.user_id,
        playlist_id,
        count = videos.len(),
        "Submissions replaced"
    );

    Ok(Json(DataResponse { data: videos }))
}

/// Fail with 403 unless the user owns the playlist or holds a contributor grant.
async fn require_can_contribute(
    state: &AppState,
    playlist: &Playlist,
    user_id: DbId,
) -> AppResult<()> {
    if playlist.owner_id == user_id {
        return Ok(());
    }
    if ContributorRepo::exists(&state.pool, playlist.id, user_id).await? {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(
        "You don't have permission to add videos to this playlist".into(),
    )))
}
