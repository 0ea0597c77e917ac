//! Domain layer containing the normalized records and the seams to the
//! outside world.
//!
//! # Architecture
//!
//! - [`entities`] - Normalized records built from upstream responses
//! - [`outcome`] - Tagged result of a provider call
//! - [`providers`] - Provider adapter trait definitions
//! - [`repositories`] - Location store trait definitions
//!
//! # Location Resolution Flow
//!
//! 1. `/location` handler receives a search string
//! 2. [`crate::application::services::LocationService`] checks the cache tiers
//! 3. On a miss, the [`providers::GeocodeProvider`] is called
//! 4. A found record is written back via [`repositories::LocationRepository`]

pub mod entities;
pub mod outcome;
pub mod providers;
pub mod repositories;
