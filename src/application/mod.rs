//! Application layer services implementing the aggregation flow.
//!
//! Services consume the domain traits (providers, repositories, cache) and
//! give HTTP handlers a small API that returns tagged outcomes.
//!
//! # Available Services
//!
//! - [`services::location_service::LocationService`] - Cache-aside geocoding
//! - [`services::discovery_service::DiscoveryService`] - Weather, business and movie lookups

pub mod services;
