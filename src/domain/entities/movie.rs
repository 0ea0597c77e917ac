//! Movie search result.

use serde::Serialize;

/// Base path poster images are served from.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500/";

/// One movie matching a location's short name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieSummary {
    pub title: String,
    pub overview: String,
    pub average_votes: f64,
    pub total_votes: i64,
    pub image_url: String,
    pub popularity: f64,
    pub released_on: String,
}

/// Builds a poster URL by plain concatenation with [`POSTER_BASE_URL`].
///
/// The poster path is appended verbatim, so an empty path yields the bare
/// base URL and a leading slash is kept.
pub fn poster_url(poster_path: &str) -> String {
    format!("{POSTER_BASE_URL}{poster_path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_concatenates() {
        assert_eq!(
            poster_url("/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"),
            "https://image.tmdb.org/t/p/w500//kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
        );
    }

    #[test]
    fn test_poster_url_empty_path() {
        assert_eq!(poster_url(""), POSTER_BASE_URL);
    }
}
