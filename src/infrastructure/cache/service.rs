//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::LocationRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching resolved locations by raw search string.
///
/// Implementations are fail-open: backend errors are logged and reported as
/// misses so a cache outage degrades to store lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a location for a search string.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    async fn get_location(&self, search_query: &str) -> CacheResult<Option<LocationRecord>>;

    /// Stores a location with optional TTL in seconds.
    ///
    /// `None` uses the implementation's default TTL.
    async fn set_location(
        &self,
        search_query: &str,
        record: &LocationRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a cached location.
    async fn invalidate(&self, search_query: &str) -> CacheResult<()>;
}
