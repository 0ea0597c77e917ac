//! Provider adapters for the upstream services.
//!
//! Each adapter issues one outbound GET, decodes the provider's JSON and maps
//! it into a normalized record through a pure function that can be tested
//! without network access.
//!
//! # Adapters
//!
//! - [`GoogleGeocoder`] - Address to location (Google Geocoding API)
//! - [`DarkSkyWeather`] - Daily forecast (Dark Sky forecast API)
//! - [`YelpBusinesses`] - Business search (Yelp Fusion, bearer token)
//! - [`TmdbMovies`] - Movie search (The Movie Database)

mod http;

pub mod darksky_weather;
pub mod google_geocoder;
pub mod tmdb_movies;
pub mod yelp_businesses;

pub use darksky_weather::DarkSkyWeather;
pub use google_geocoder::GoogleGeocoder;
pub use tmdb_movies::TmdbMovies;
pub use yelp_businesses::YelpBusinesses;

pub use http::build_http_client;
