//! Route definitions for the `/playlists` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::playlists;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /all                            list_all
/// POST   /                               create
/// GET    /{id}                           get
/// DELETE /{id}                           delete (owner only)
/// GET    /{id}/contributors              list_contributors
/// POST   /{id}/contributors              grant_contributor (owner only)
/// DELETE /{id}/contributors/{user_id}    revoke_contributor (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(playlists::list_all))
        .route("/", post(playlists::create))
        .route("/{id}", get(playlists::get).delete(playlists::delete))
        .route(
            "/{id}/contributors",
            get(playlists::list_contributors).post(playlists::grant_contributor),
        )
        .route(
            "/{id}/contributors/{user_id}",
            delete(playlists::revoke_contributor),
        )
}
