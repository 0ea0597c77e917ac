//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::LocationRecord;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for resolved locations.
///
/// Records are stored as JSON under `location:<raw search string>`.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "location:".to_string(),
        })
    }

    fn build_key(&self, search_query: &str) -> String {
        format!("{}{}", self.key_prefix, search_query)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_location(&self, search_query: &str) -> CacheResult<Option<LocationRecord>> {
        let key = self.build_key(search_query);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<LocationRecord>(&raw) {
                Ok(record) => {
                    debug!("Cache HIT: {:?}", search_query);
                    Ok(Some(record))
                }
                Err(e) => {
                    warn!("Discarding unreadable cache entry {:?}: {}", search_query, e);
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!("Cache MISS: {:?}", search_query);
                Ok(None)
            }
            Err(e) => {
                error!("Redis GET error for {:?}: {}", search_query, e);
                Ok(None)
            }
        }
    }

    async fn set_location(
        &self,
        search_query: &str,
        record: &LocationRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(search_query);
        let mut conn = self.client.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(record)
            .map_err(|e| CacheError::OperationError(format!("Failed to encode location: {}", e)))?;

        match conn.set_ex::<_, _, ()>(&key, payload, ttl).await {
            Ok(_) => {
                debug!("Cache SET: {:?} (TTL: {}s)", search_query, ttl);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {:?}: {}", search_query, e);
                Ok(())
            }
        }
    }

    async fn invalidate(&self, search_query: &str) -> CacheResult<()> {
        let key = self.build_key(search_query);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!("Cache INVALIDATE: {:?}", search_query);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Redis DEL error for {:?}: {}", search_query, e);
                Ok(())
            }
        }
    }
}
