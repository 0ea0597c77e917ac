//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /location` - Address to location (cache-aside)
//! - `GET /weather`  - Daily forecast
//! - `GET /yelp`     - Nearby businesses
//! - `GET /movies`   - Movies by short name
//! - anything else   - `404 you are in the wrong place`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for browser front ends
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with endpoints, fallback and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Wraps [`router`] so `/location/` and `/location` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
