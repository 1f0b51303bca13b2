//! HTTP handlers, one module per resource.

pub mod playlists;
pub mod scores;
pub mod users;
pub mod videos;
