//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Hot cache tier (Redis and no-op implementations)
//! - [`persistence`] - Location store (PostgreSQL and in-memory implementations)
//! - [`providers`] - HTTP adapters for the upstream services

pub mod cache;
pub mod persistence;
pub mod providers;
