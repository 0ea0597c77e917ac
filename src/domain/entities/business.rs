//! Local business listing.

use serde::Serialize;

/// One business returned by a local search around a coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessListing {
    pub name: String,
    pub image_url: String,
    pub price: Option<String>,
    pub rating: f64,
    pub url: String,
}
