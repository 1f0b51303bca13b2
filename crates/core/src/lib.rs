//! Domain logic shared across the ReelRank backend.
//!
//! - [`error`] -- the domain error enum used by every layer.
//! - [`types`] -- database id and timestamp aliases.
//! - [`video_link`] -- accepted video link forms and embed-URL normalization.
//! - [`validation`] -- input validation rules for users, playlists, and scores.

pub mod error;
pub mod types;
pub mod validation;
pub mod video_link;
