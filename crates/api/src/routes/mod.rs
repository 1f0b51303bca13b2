pub mod health;
pub mod playlists;
pub mod scores;
pub mod users;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users/add                                register (public)
/// /users/login                              login (public)
/// /users/refresh                            refresh (public)
/// /users/logout                             logout
/// /users/me                                 current user
///
/// /playlists/all                            list playlists
/// /playlists                                create
/// /playlists/{id}                           get, delete (owner)
/// /playlists/{id}/contributors              list, grant (owner)
/// /playlists/{id}/contributors/{user_id}    revoke (owner)
///
/// /videos/{playlist_id}                     list, replace own submissions
/// /videos/my-submissions/{playlist_id}      own submissions
///
/// /scores                                   submit score
/// /scores/video/{video_id}                  scores for a video
/// /scores/mine/{playlist_id}                own scores in a playlist
/// /scores/all/{playlist_id}                 playlist ranking
/// ```
///
/// Everything except `/users/{add,login,refresh}` requires a Bearer token,
/// enforced per-handler via the `AuthUser` extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/playlists", playlists::router())
        .nest("/videos", videos::router())
        .nest("/scores", scores::router())
}
