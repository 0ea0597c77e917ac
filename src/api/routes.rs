//! API route configuration.

use crate::api::handlers::{location_handler, movies_handler, weather_handler, yelp_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// The four lookup endpoints.
///
/// # Endpoints
///
/// - `GET /location` - Resolve an address (cache-aside)
/// - `GET /weather`  - Daily forecast for coordinates
/// - `GET /yelp`     - Businesses near coordinates
/// - `GET /movies`   - Movies matching a location's short name
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/location", get(location_handler))
        .route("/weather", get(weather_handler))
        .route("/yelp", get(yelp_handler))
        .route("/movies", get(movies_handler))
}
