//! Handler for daily forecasts.

use axum::{
    Json,
    extract::{Query, State},
};
use std::collections::HashMap;

use crate::api::dto::DataObject;
use crate::domain::entities::ForecastEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the daily forecast for a resolved location.
///
/// # Endpoint
///
/// `GET /weather?data[latitude]=..&data[longitude]=..`
///
/// Responds with one entry per upstream day, or `[]` when the provider has none.
///
/// # Errors
///
/// Returns 400 if the coordinates are missing or invalid.
/// Returns 502 if the provider call fails.
pub async fn weather_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ForecastEntry>>, AppError> {
    let coordinates = DataObject::from_params(&params)?.coordinates()?;

    let entries = state
        .discovery_service
        .forecast(coordinates)
        .await
        .into_list()?;

    Ok(Json(entries))
}
