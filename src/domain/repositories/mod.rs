//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`LocationRepository`] - Persistent cache of resolved locations
//!
//! Implementations live in `crate::infrastructure::persistence`.

pub mod location_repository;

pub use location_repository::{LocationRepository, StoredLocation};

#[cfg(test)]
pub use location_repository::MockLocationRepository;
