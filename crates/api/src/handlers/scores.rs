//! Handlers for the `/scores` resource: voting and the playlist ranking.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use reelrank_core::error::CoreError;
use reelrank_core::types::DbId;
use reelrank_core::validation::validate_score_value;
use reelrank_db::models::score::UpsertScore;
use reelrank_db::repositories::{ScoreRepo, VideoRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::playlists::find_playlist;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /scores`.
#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub video_id: DbId,
    pub score: i32,
    pub comment: Option<String>,
}

/// POST /api/scores
///
/// Submit the caller's score (1-11, optional comment) for a video.
/// Re-submitting overwrites the previous score; a user never holds two
/// scores for the same video.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitScoreRequest>,
) -> AppResult<impl IntoResponse> {
    validate_score_value(input.score)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    VideoRepo::find_by_id(&state.pool, input.video_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Video",
                id: input.video_id,
            })
        })?;

    let upsert = UpsertScore {
        video_id: input.video_id,
        user_id: auth.user_id,
        score: input.score,
        comment: input.comment,
    };
    let score = ScoreRepo::upsert(&state.pool, &upsert).await?;

    tracing::info!(
        user_id = auth.user_id,
        video_id = input.video_id,
        score = input.score,
        "Score submitted"
    );

    Ok(Json(DataResponse { data: score }))
}

/// GET /api/scores/video/{video_id}
///
/// List all scores for a video with scorer usernames.
pub async fn for_video(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    VideoRepo::find_by_id(&state.pool, video_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Video",
                id: video_id,
            })
        })?;

    let scores = ScoreRepo::list_by_video(&state.pool, video_id).await?;
    Ok(Json(DataResponse { data: scores }))
}

/// GET /api/scores/mine/{playlist_id}
///
/// The caller's scores across a playlist.
pub async fn mine(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    find_playlist(&state, playlist_id).await?;

    let scores =
        ScoreRepo::list_by_playlist_and_user(&state.pool, playlist_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: scores }))
}

/// GET /api/scores/all/{playlist_id}
///
/// The ranking of a playlist: every video with its average score and vote
/// count, best average first. When the playlist was created with
/// `owner_vote_counts = false`, the owner's votes are left out of the
/// aggregation.
pub async fn ranking(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let playlist = find_playlist(&state, playlist_id).await?;

    let ranking = ScoreRepo::playlist_ranking(
        &state.pool,
        playlist.id,
        playlist.owner_id,
        playlist.owner_vote_counts,
    )
    .await?;

    Ok(Json(DataResponse { data: ranking }))
}
