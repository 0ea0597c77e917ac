//! Dark Sky daily forecast adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::http::{endpoint, fetch_json, settle};
use crate::domain::entities::{Coordinates, ForecastEntry};
use crate::domain::outcome::{Outcome, ProviderError};
use crate::domain::providers::WeatherProvider;

const PROVIDER: &str = "weather";

/// Default host for the Dark Sky forecast API.
pub const DEFAULT_BASE_URL: &str = "https://api.darksky.net";

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    #[serde(default)]
    pub data: Vec<DailyPoint>,
}

#[derive(Debug, Deserialize)]
pub struct DailyPoint {
    pub time: i64,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Maps every daily point to a [`ForecastEntry`], preserving order and count.
pub fn map_forecast_response(response: ForecastResponse) -> Outcome<Vec<ForecastEntry>> {
    let mut entries = Vec::with_capacity(response.daily.data.len());

    for (index, day) in response.daily.data.into_iter().enumerate() {
        match ForecastEntry::from_unix(day.summary.unwrap_or_default(), day.time) {
            Some(entry) => entries.push(entry),
            None => {
                return Outcome::Failed(ProviderError::Shape {
                    provider: PROVIDER,
                    what: format!("a valid time in daily.data[{index}]"),
                });
            }
        }
    }

    Outcome::from_items(entries)
}

/// Fetches daily forecasts from Dark Sky.
///
/// The API key is a path segment: `/forecast/{key}/{lat},{lng}`.
pub struct DarkSkyWeather {
    http: Client,
    base_url: String,
    api_key: String,
}

impl DarkSkyWeather {
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for DarkSkyWeather {
    async fn daily_forecast(&self, coordinates: Coordinates) -> Outcome<Vec<ForecastEntry>> {
        let path = format!(
            "/forecast/{}/{}",
            self.api_key,
            coordinates.as_path_segment()
        );
        let request = self.http.get(endpoint(&self.base_url, &path));

        let outcome = match fetch_json::<ForecastResponse>(PROVIDER, request).await {
            Ok(response) => map_forecast_response(response),
            Err(err) => Outcome::Failed(err),
        };

        settle(outcome)
    }
}
