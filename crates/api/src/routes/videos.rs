//! Route definitions for the `/videos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET  /{playlist_id}                  list
/// POST /{playlist_id}                  submit (replaces own submissions)
/// GET  /my-submissions/{playlist_id}   my_submissions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/my-submissions/{playlist_id}", get(videos::my_submissions))
        .route("/{playlist_id}", get(videos::list).post(videos::submit))
}
