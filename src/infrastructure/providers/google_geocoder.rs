//! Google Geocoding adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http::{endpoint, fetch_json, settle};
use crate::domain::entities::LocationRecord;
use crate::domain::outcome::{Outcome, ProviderError};
use crate::domain::providers::GeocodeProvider;

const PROVIDER: &str = "geocode";

/// Default host for the Google Geocoding API.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Geocoding response envelope.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub struct AddressComponent {
    pub short_name: String,
}

/// Maps a geocoding response to the first result's [`LocationRecord`].
///
/// `ZERO_RESULTS` or an empty result list is [`Outcome::Empty`]; any other
/// non-`OK` status is a rejection.
pub fn map_geocode_response(response: GeocodeResponse) -> Outcome<LocationRecord> {
    match response.status.as_deref() {
        None | Some("OK") => {}
        Some("ZERO_RESULTS") => return Outcome::Empty,
        Some(status) => {
            let reason = match response.error_message {
                Some(message) => format!("{status}: {message}"),
                None => status.to_string(),
            };
            return Outcome::Failed(ProviderError::Rejected {
                provider: PROVIDER,
                reason,
            });
        }
    }

    let Some(first) = response.results.into_iter().next() else {
        return Outcome::Empty;
    };

    let Some(component) = first.address_components.into_iter().next() else {
        return Outcome::Failed(ProviderError::Shape {
            provider: PROVIDER,
            what: "address_components[0]".to_string(),
        });
    };

    Outcome::Found(LocationRecord::new(
        first.formatted_address,
        first.geometry.location.lat,
        first.geometry.location.lng,
        component.short_name,
    ))
}

/// Resolves addresses through the Google Geocoding API.
pub struct GoogleGeocoder {
    http: Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl GeocodeProvider for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Outcome<LocationRecord> {
        let request = self
            .http
            .get(endpoint(&self.base_url, "/maps/api/geocode/json"))
            .query(&[("address", address), ("key", self.api_key.as_str())]);

        let outcome = match fetch_json::<GeocodeResponse>(PROVIDER, request).await {
            Ok(response) => map_geocode_response(response),
            Err(err) => Outcome::Failed(err),
        };

        settle(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> GeocodeResponse {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_maps_first_result() {
        let response = parse(
            r#"{
                "status": "OK",
                "results": [
                    {
                        "formatted_address": "Seattle, WA, USA",
                        "geometry": { "location": { "lat": 47.6062095, "lng": -122.3320708 } },
                        "address_components": [
                            { "long_name": "Seattle", "short_name": "Seattle" },
                            { "long_name": "King County", "short_name": "King County" }
                        ]
                    },
                    {
                        "formatted_address": "Seattle, Other",
                        "geometry": { "location": { "lat": 1.0, "lng": 2.0 } },
                        "address_components": [ { "short_name": "Other" } ]
                    }
                ]
            }"#,
        );

        let expected = LocationRecord::new(
            "Seattle, WA, USA".to_string(),
            47.6062095,
            -122.3320708,
            "Seattle".to_string(),
        );
        assert_eq!(map_geocode_response(response), Outcome::Found(expected));
    }

    #[test]
    fn test_zero_results_is_empty() {
        let response = parse(r#"{ "status": "ZERO_RESULTS", "results": [] }"#);
        assert_eq!(map_geocode_response(response), Outcome::Empty);
    }

    #[test]
    fn test_missing_status_with_no_results_is_empty() {
        let response = parse(r#"{ "results": [] }"#);
        assert_eq!(map_geocode_response(response), Outcome::Empty);
    }

    #[test]
    fn test_denied_is_rejected() {
        let response = parse(
            r#"{ "status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "results": [] }"#,
        );

        match map_geocode_response(response) {
            Outcome::Failed(ProviderError::Rejected { reason, .. }) => {
                assert!(reason.starts_with("REQUEST_DENIED"));
                assert!(reason.contains("API key is invalid"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_address_component_is_shape_error() {
        let response = parse(
            r#"{
                "status": "OK",
                "results": [ {
                    "formatted_address": "Nowhere",
                    "geometry": { "location": { "lat": 0.0, "lng": 0.0 } }
                } ]
            }"#,
        );

        assert!(matches!(
            map_geocode_response(response),
            Outcome::Failed(ProviderError::Shape { .. })
        ));
    }
}
