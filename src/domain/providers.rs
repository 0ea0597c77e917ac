//! Provider adapter trait definitions.
//!
//! Each trait wraps one upstream service. Implementations live in
//! `crate::infrastructure::providers`; mocks are generated via `mockall` for
//! unit tests.

use async_trait::async_trait;

use crate::domain::entities::{
    BusinessListing, Coordinates, ForecastEntry, LocationRecord, MovieSummary,
};
use crate::domain::outcome::Outcome;

/// Resolves a free-text address to a location.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Returns the first match for `address`, or [`Outcome::Empty`] when the
    /// provider has no result for it.
    async fn geocode(&self, address: &str) -> Outcome<LocationRecord>;
}

/// Fetches a daily forecast for a coordinate pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns one entry per upstream day, in upstream order.
    async fn daily_forecast(&self, coordinates: Coordinates) -> Outcome<Vec<ForecastEntry>>;
}

/// Searches businesses around a coordinate pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessProvider: Send + Sync {
    async fn search(&self, coordinates: Coordinates) -> Outcome<Vec<BusinessListing>>;
}

/// Searches movies by title text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieProvider: Send + Sync {
    async fn search(&self, query: &str) -> Outcome<Vec<MovieSummary>>;
}
