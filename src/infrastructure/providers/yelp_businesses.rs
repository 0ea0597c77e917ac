//! Yelp Fusion business search adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http::{endpoint, fetch_json, settle};
use crate::domain::entities::{BusinessListing, Coordinates};
use crate::domain::outcome::Outcome;
use crate::domain::providers::BusinessProvider;

const PROVIDER: &str = "yelp";

/// Default host for the Yelp Fusion API.
pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com";

#[derive(Debug, Deserialize)]
pub struct BusinessSearchResponse {
    #[serde(default)]
    pub businesses: Vec<Business>,
}

/// One upstream business. Fields other than `name` may be missing or `null`.
#[derive(Debug, Deserialize)]
pub struct Business {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<Business> for BusinessListing {
    fn from(b: Business) -> Self {
        Self {
            name: b.name,
            image_url: b.image_url.unwrap_or_default(),
            price: b.price,
            rating: b.rating.unwrap_or_default(),
            url: b.url.unwrap_or_default(),
        }
    }
}

pub fn map_business_response(response: BusinessSearchResponse) -> Outcome<Vec<BusinessListing>> {
    Outcome::from_items(
        response
            .businesses
            .into_iter()
            .map(BusinessListing::from)
            .collect(),
    )
}

/// Searches businesses near a coordinate pair, authenticated with a bearer token.
pub struct YelpBusinesses {
    http: Client,
    base_url: String,
    api_key: String,
}

impl YelpBusinesses {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl BusinessProvider for YelpBusinesses {
    async fn search(&self, coordinates: Coordinates) -> Outcome<Vec<BusinessListing>> {
        let request = self
            .http
            .get(endpoint(&self.base_url, "/v3/businesses/search"))
            .query(&[
                ("latitude", coordinates.latitude),
                ("longitude", coordinates.longitude),
            ])
            .bearer_auth(&self.api_key);

        let outcome = match fetch_json::<BusinessSearchResponse>(PROVIDER, request).await {
            Ok(response) => map_business_response(response),
            Err(err) => Outcome::Failed(err),
        };

        settle(outcome)
    }
}
