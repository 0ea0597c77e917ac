//! Handler for movie search.

use axum::{
    Json,
    extract::{Query, State},
};
use std::collections::HashMap;

use crate::api::dto::DataObject;
use crate::domain::entities::MovieSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Returns movies matching a resolved location's short name.
///
/// # Endpoint
///
/// `GET /movies?data[short_name]=..`
///
/// # Errors
///
/// Returns 400 if `short_name` is missing.
/// Returns 502 if the provider call fails.
pub async fn movies_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    let short_name = DataObject::from_params(&params)?.short_name()?;

    let movies = state
        .discovery_service
        .movies(&short_name)
        .await
        .into_list()?;

    Ok(Json(movies))
}
