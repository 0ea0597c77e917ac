//! Handler for nearby business listings.

use axum::{
    Json,
    extract::{Query, State},
};
use std::collections::HashMap;

use crate::api::dto::DataObject;
use crate::domain::entities::BusinessListing;
use crate::error::AppError;
use crate::state::AppState;

/// Returns businesses near a resolved location.
///
/// # Endpoint
///
/// `GET /yelp?data[latitude]=..&data[longitude]=..`
///
/// # Errors
///
/// Returns 400 if the coordinates are missing or invalid.
/// Returns 502 if the provider call fails.
pub async fn yelp_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<BusinessListing>>, AppError> {
    let coordinates = DataObject::from_params(&params)?.coordinates()?;

    let listings = state
        .discovery_service
        .businesses(coordinates)
        .await
        .into_list()?;

    Ok(Json(listings))
}
