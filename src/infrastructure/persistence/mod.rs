//! Location store implementations.
//!
//! # Repositories
//!
//! - [`PgLocationRepository`] - PostgreSQL-backed store (persists across restarts)
//! - [`MemoryLocationRepository`] - Process-local store used when no database is configured

pub mod memory_location_repository;
pub mod pg_location_repository;

pub use memory_location_repository::MemoryLocationRepository;
pub use pg_location_repository::PgLocationRepository;
