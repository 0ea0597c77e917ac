//! Process-local location repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::LocationRecord;
use crate::domain::repositories::{LocationRepository, StoredLocation};
use crate::error::AppError;

/// In-memory store used when no database is configured.
///
/// Keeps insertion order so reads return the oldest row for a key, the same
/// as the PostgreSQL repository. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryLocationRepository {
    rows: RwLock<Vec<StoredLocation>>,
}

impl MemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for MemoryLocationRepository {
    async fn find(&self, search_query: &str) -> Result<Option<LocationRecord>, AppError> {
        let rows = self.rows.read().await;

        Ok(rows
            .iter()
            .find(|row| row.search_query == search_query)
            .map(|row| row.record.clone()))
    }

    async fn insert(&self, search_query: &str, record: &LocationRecord) -> Result<(), AppError> {
        self.rows.write().await.push(StoredLocation {
            search_query: search_query.to_string(),
            record: record.clone(),
            created_at: Utc::now(),
        });

        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StoredLocation>, AppError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let rows = self.rows.read().await;

        Ok(rows.iter().rev().take(limit).cloned().collect())
    }

    async fn delete(&self, search_query: &str) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.search_query != search_query);

        Ok((before - rows.len()) as u64)
    }
}
