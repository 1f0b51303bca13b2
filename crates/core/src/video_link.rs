//! Accepted video link forms and normalization to embeddable URLs.
//!
//! Submitted links must be YouTube share/watch/embed links or public Google
//! Drive file links. Everything is normalized to the embeddable form before
//! storage so the frontend can drop the stored URL straight into an iframe.

const YOUTUBE_WATCH: &str = "https://www.youtube.com/watch?v=";
const YOUTUBE_SHORT: &str = "https://youtu.be/";
const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";
const DRIVE_FILE: &str = "https://drive.google.com/file/d/";

/// Normalize a submitted video link to its embeddable form.
///
/// Accepted inputs and their normalizations:
///
/// | Input                                        | Stored as                                      |
/// |----------------------------------------------|------------------------------------------------|
/// | `https://www.youtube.com/watch?v=CODE`       | `https://www.youtube.com/embed/CODE`           |
/// | `https://youtu.be/CODE`                      | `https://www.youtube.com/embed/CODE`           |
/// | `https://www.youtube.com/embed/CODE`         | unchanged                                      |
/// | `https://drive.google.com/file/d/CODE/...`   | `https://drive.google.com/file/d/CODE/preview` |
///
/// Returns `Err` with a user-facing message for anything else.
pub fn normalize_link(link: &str) -> Result<String, String> {
    if let Some(code) = link.strip_prefix(YOUTUBE_WATCH) {
        let code = strip_query_extras(code);
        if code.is_empty() {
            return Err(invalid_link_message());
        }
        return Ok(format!("{YOUTUBE_EMBED}{code}"));
    }

    if let Some(code) = link.strip_prefix(YOUTUBE_SHORT) {
        let code = strip_query_extras(code);
        if code.is_empty() {
            return Err(invalid_link_message());
        }
        return Ok(format!("{YOUTUBE_EMBED}{code}"));
    }

    if let Some(code) = link.strip_prefix(YOUTUBE_EMBED) {
        if code.is_empty() {
            return Err(invalid_link_message());
        }
        return Ok(link.to_string());
    }

    if let Some(rest) = link.strip_prefix(DRIVE_FILE) {
        // Drive share links look like .../file/d/CODE/view?usp=sharing.
        let code = rest.split('/').next().unwrap_or("");
        if code.is_empty() {
            return Err(invalid_link_message());
        }
        return Ok(format!("{DRIVE_FILE}{code}/preview"));
    }

    Err(invalid_link_message())
}

/// Drop everything after the first `&` or `?` in a video code segment.
///
/// Watch URLs often carry extra parameters (`&t=42s`, `&list=...`) that must
/// not end up in the embed URL.
fn strip_query_extras(code: &str) -> &str {
    code.split(['&', '?']).next().unwrap_or("")
}

fn invalid_link_message() -> String {
    "Invalid video link. Use a YouTube share link or a public Google Drive file link".to_string()
}
