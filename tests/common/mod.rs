#![allow(dead_code)]

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use city_explorer::application::services::{DiscoveryService, LocationService};
use city_explorer::domain::entities::{
    BusinessListing, Coordinates, ForecastEntry, LocationRecord, MovieSummary,
};
use city_explorer::domain::outcome::{Outcome, ProviderError};
use city_explorer::domain::providers::{
    BusinessProvider, GeocodeProvider, MovieProvider, WeatherProvider,
};
use city_explorer::infrastructure::cache::NullCache;
use city_explorer::domain::repositories::LocationRepository;
use city_explorer::infrastructure::persistence::{MemoryLocationRepository, PgLocationRepository};
use city_explorer::state::AppState;

pub fn seattle() -> LocationRecord {
    LocationRecord::new(
        "Seattle, WA, USA".to_string(),
        47.6062,
        -122.3321,
        "Seattle".to_string(),
    )
}

pub fn transport_failure(provider: &'static str) -> ProviderError {
    ProviderError::Transport {
        provider,
        message: "connection refused".to_string(),
    }
}

/// Geocoder answering from a fixed table and counting calls.
#[derive(Default)]
pub struct FakeGeocoder {
    pub answers: HashMap<String, LocationRecord>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeGeocoder {
    pub fn with(address: &str, record: LocationRecord) -> Self {
        let mut answers = HashMap::new();
        answers.insert(address.to_string(), record);
        Self {
            answers,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeProvider for FakeGeocoder {
    async fn geocode(&self, address: &str) -> Outcome<LocationRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Outcome::Failed(transport_failure("geocode"));
        }

        match self.answers.get(address) {
            Some(record) => Outcome::Found(record.clone()),
            None => Outcome::Empty,
        }
    }
}

/// Provider returning a fixed outcome for every call.
pub struct Fixed<T>(pub Outcome<Vec<T>>);

#[async_trait]
impl WeatherProvider for Fixed<ForecastEntry> {
    async fn daily_forecast(&self, _coordinates: Coordinates) -> Outcome<Vec<ForecastEntry>> {
        self.0.clone()
    }
}

#[async_trait]
impl BusinessProvider for Fixed<BusinessListing> {
    async fn search(&self, _coordinates: Coordinates) -> Outcome<Vec<BusinessListing>> {
        self.0.clone()
    }
}

#[async_trait]
impl MovieProvider for Fixed<MovieSummary> {
    async fn search(&self, _query: &str) -> Outcome<Vec<MovieSummary>> {
        self.0.clone()
    }
}

pub fn sample_forecast(days: usize) -> Vec<ForecastEntry> {
    (0..days)
        .map(|i| {
            ForecastEntry::from_unix(format!("Day {}", i), 1_539_586_800 + i as i64 * 86_400)
                .unwrap()
        })
        .collect()
}

pub fn sample_business() -> BusinessListing {
    BusinessListing {
        name: "Pike Place Chowder".to_string(),
        image_url: "https://s3-media.fl.yelpcdn.com/bphoto/a.jpg".to_string(),
        price: Some("$$".to_string()),
        rating: 4.5,
        url: "https://www.yelp.com/biz/pike-place-chowder-seattle".to_string(),
    }
}

pub fn sample_movie() -> MovieSummary {
    MovieSummary {
        title: "Sleepless in Seattle".to_string(),
        overview: "A recently widowed man's son calls a radio talk-show.".to_string(),
        average_votes: 6.6,
        total_votes: 881,
        image_url: "https://image.tmdb.org/t/p/w500//afkYP15OeUOD0tFEmj6VvejuOcz.jpg"
            .to_string(),
        popularity: 8.2,
        released_on: "1993-06-24".to_string(),
    }
}

pub struct Providers {
    pub geocoder: Arc<FakeGeocoder>,
    pub weather: Outcome<Vec<ForecastEntry>>,
    pub businesses: Outcome<Vec<BusinessListing>>,
    pub movies: Outcome<Vec<MovieSummary>>,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            geocoder: Arc::new(FakeGeocoder::with("Seattle", seattle())),
            weather: Outcome::Found(sample_forecast(8)),
            businesses: Outcome::Found(vec![sample_business()]),
            movies: Outcome::Found(vec![sample_movie()]),
        }
    }
}

/// Builds state over the in-memory store with caching disabled.
pub fn create_test_state(providers: Providers) -> AppState {
    build_state(Arc::new(MemoryLocationRepository::new()), providers)
}

/// Builds state over a migrated test database with caching disabled.
pub fn create_pg_state(pool: PgPool, providers: Providers) -> AppState {
    build_state(Arc::new(PgLocationRepository::new(Arc::new(pool))), providers)
}

fn build_state(repository: Arc<dyn LocationRepository>, providers: Providers) -> AppState {
    let location_service = Arc::new(LocationService::new(
        repository,
        Arc::new(NullCache::new()),
        providers.geocoder,
    ));

    let discovery_service = Arc::new(DiscoveryService::new(
        Arc::new(Fixed(providers.weather)),
        Arc::new(Fixed(providers.businesses)),
        Arc::new(Fixed(providers.movies)),
    ));

    AppState::new(location_service, discovery_service)
}
