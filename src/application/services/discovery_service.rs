//! Lookups keyed by an already resolved location.

use std::sync::Arc;

use crate::domain::entities::{BusinessListing, Coordinates, ForecastEntry, MovieSummary};
use crate::domain::outcome::Outcome;
use crate::domain::providers::{BusinessProvider, MovieProvider, WeatherProvider};

/// Fans out to the weather, business and movie providers.
///
/// Every method takes the resolved input it needs explicitly. Callers obtain
/// coordinates or a short name from a prior `/location` call.
pub struct DiscoveryService {
    weather: Arc<dyn WeatherProvider>,
    businesses: Arc<dyn BusinessProvider>,
    movies: Arc<dyn MovieProvider>,
}

impl DiscoveryService {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        businesses: Arc<dyn BusinessProvider>,
        movies: Arc<dyn MovieProvider>,
    ) -> Self {
        Self {
            weather,
            businesses,
            movies,
        }
    }

    pub async fn forecast(&self, coordinates: Coordinates) -> Outcome<Vec<ForecastEntry>> {
        self.weather.daily_forecast(coordinates).await
    }

    pub async fn businesses(&self, coordinates: Coordinates) -> Outcome<Vec<BusinessListing>> {
        self.businesses.search(coordinates).await
    }

    /// Searches movies by the location's short name, not its coordinates.
    pub async fn movies(&self, short_name: &str) -> Outcome<Vec<MovieSummary>> {
        self.movies.search(short_name).await
    }
}
