//! Route definitions for the `/scores` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::scores;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// POST /                       submit
/// GET  /video/{video_id}       for_video
/// GET  /mine/{playlist_id}     mine
/// GET  /all/{playlist_id}      ranking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(scores::submit))
        .route("/video/{video_id}", get(scores::for_video))
        .route("/mine/{playlist_id}", get(scores::mine))
        .route("/all/{playlist_id}", get(scores::ranking))
}
