//! Repository trait for resolved locations.

use crate::domain::entities::LocationRecord;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A stored location together with the raw search string it was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredLocation {
    pub search_query: String,
    pub record: LocationRecord,
    pub created_at: DateTime<Utc>,
}

/// Repository interface for previously geocoded locations.
///
/// Keys are the raw search strings exactly as received. No trimming or case
/// folding is applied, so `"Seattle"` and `"seattle "` are distinct keys.
///
/// The store is additive: concurrent misses for the same key may insert
/// duplicates, and reads always return the oldest row for a key.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLocationRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLocationRepository`] - Process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Finds the first location stored under `search_query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, search_query: &str) -> Result<Option<LocationRecord>, AppError>;

    /// Stores `record` under `search_query`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, search_query: &str, record: &LocationRecord) -> Result<(), AppError>;

    /// Lists stored locations, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, limit: i64) -> Result<Vec<StoredLocation>, AppError>;

    /// Removes every row stored under `search_query`, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, search_query: &str) -> Result<u64, AppError>;
}
