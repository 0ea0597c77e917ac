//! Business logic services for the application layer.

pub mod discovery_service;
pub mod location_service;

pub use discovery_service::DiscoveryService;
pub use location_service::{LocationService, LocationSource};
