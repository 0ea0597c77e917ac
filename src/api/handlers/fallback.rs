//! Handler for unmatched paths.

use axum::http::StatusCode;

/// Body returned for every path outside the four endpoints.
pub const NOT_FOUND_BODY: &str = "you are in the wrong place";

/// Answers any unmatched path with a plain-text 404.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
