//! PostgreSQL implementation of the location repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::LocationRecord;
use crate::domain::repositories::{LocationRepository, StoredLocation};
use crate::error::AppError;

/// PostgreSQL repository over the `locations` table.
///
/// Rows are only ever inserted or deleted, never updated.
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct LocationRow {
    search_query: String,
    formatted_query: String,
    latitude: f64,
    longitude: f64,
    short_name: String,
    created_at: DateTime<Utc>,
}

impl LocationRow {
    fn into_record(self) -> LocationRecord {
        LocationRecord::new(
            self.formatted_query,
            self.latitude,
            self.longitude,
            self.short_name,
        )
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn find(&self, search_query: &str) -> Result<Option<LocationRecord>, AppError> {
        // Oldest row wins when a race inserted duplicates.
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT search_query, formatted_query, latitude, longitude, short_name, created_at
            FROM locations
            WHERE search_query = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(search_query)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(LocationRow::into_record))
    }

    async fn insert(&self, search_query: &str, record: &LocationRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO locations (search_query, formatted_query, latitude, longitude, short_name)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(search_query)
        .bind(&record.formatted_query)
        .bind(record.latitude)
        .bind(record.longitude)
        .bind(&record.short_name)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StoredLocation>, AppError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT search_query, formatted_query, latitude, longitude, short_name, created_at
            FROM locations
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let search_query = r.search_query.clone();
                let created_at = r.created_at;
                StoredLocation {
                    search_query,
                    created_at,
                    record: r.into_record(),
                }
            })
            .collect())
    }

    async fn delete(&self, search_query: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE search_query = $1")
            .bind(search_query)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
