//! Input validation rules for users, playlists, and scores.
//!
//! Each function returns `Ok(())` or a user-facing message; HTTP handlers
//! map the message to a 400 response.

/// Inclusive score range: every vote is a whole number from 1 to 11.
pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 11;

/// Minimum password length enforced at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a score value against the 1..=11 range.
pub fn validate_score_value(score: i32) -> Result<(), String> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(format!(
            "Score must be between {MIN_SCORE} and {MAX_SCORE}"
        ));
    }
    Ok(())
}

/// Validate playlist creation input: non-blank name, positive video limit.
pub fn validate_playlist_input(name: &str, video_limit: i32) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Playlist name is required".to_string());
    }
    if video_limit < 1 {
        return Err("Video limit must be at least 1".to_string());
    }
    Ok(())
}

/// Validate a username: non-blank after trimming.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    Ok(())
}
