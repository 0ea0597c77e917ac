//! Handler for location resolution.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

use crate::api::dto::search_text;
use crate::domain::entities::LocationRecord;
use crate::domain::outcome::Outcome;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a free-text address to a location.
///
/// # Endpoint
///
/// `GET /location?data=<address>`
///
/// # Request Flow
///
/// 1. Check the hot cache, then the location store, keyed by the raw `data` value
/// 2. On a miss, call the geocoding provider
/// 3. Persist a found record under the same key
///
/// # Errors
///
/// Returns 400 if `data` is missing or blank.
/// Returns 404 if the provider has no result for the address.
/// Returns 502 if the provider call fails.
/// Returns 500 if the location store fails.
pub async fn location_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<LocationRecord>, AppError> {
    let search = search_text(&params)?;

    let (outcome, source) = state.location_service.resolve(&search).await?;
    debug!("Location {:?} answered from {}", search, source.as_str());

    match outcome {
        Outcome::Found(record) => Ok(Json(record)),
        Outcome::Empty => Err(AppError::not_found(
            "No location found for query",
            json!({ "query": search }),
        )),
        Outcome::Failed(err) => Err(err.into()),
    }
}
