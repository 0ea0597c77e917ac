//! Cache-aside location resolution.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::LocationRecord;
use crate::domain::outcome::Outcome;
use crate::domain::providers::GeocodeProvider;
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Where a resolved location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Cache,
    Store,
    Provider,
}

impl LocationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Store => "store",
            Self::Provider => "provider",
        }
    }
}

/// Resolves search strings to locations, consulting the cache tiers before
/// the geocoding provider.
///
/// # Lookup Order
///
/// 1. Hot cache ([`CacheService`], fail-open)
/// 2. Location store ([`LocationRepository`])
/// 3. Geocoding provider; a found record is written back to both tiers
///
/// Keys are the raw search strings. There is no expiry in the store and no
/// coordination between concurrent misses for the same key.
pub struct LocationService {
    repository: Arc<dyn LocationRepository>,
    cache: Arc<dyn CacheService>,
    geocoder: Arc<dyn GeocodeProvider>,
}

impl LocationService {
    /// Creates a new location service.
    pub fn new(
        repository: Arc<dyn LocationRepository>,
        cache: Arc<dyn CacheService>,
        geocoder: Arc<dyn GeocodeProvider>,
    ) -> Self {
        Self {
            repository,
            cache,
            geocoder,
        }
    }

    /// Resolves `search_query` to a location.
    ///
    /// Returns the outcome together with the tier that answered. `Empty` and
    /// `Failed` geocode outcomes are returned as-is and nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the location store fails.
    pub async fn resolve(
        &self,
        search_query: &str,
    ) -> Result<(Outcome<LocationRecord>, LocationSource), AppError> {
        if let Ok(Some(record)) = self.cache.get_location(search_query).await {
            record_lookup(LocationSource::Cache);
            return Ok((Outcome::Found(record), LocationSource::Cache));
        }

        if let Some(record) = self.repository.find(search_query).await? {
            debug!("Store HIT for {:?}", search_query);
            self.warm_cache(search_query, &record).await;
            record_lookup(LocationSource::Store);
            return Ok((Outcome::Found(record), LocationSource::Store));
        }

        debug!("Store MISS for {:?}, calling geocoder", search_query);
        let outcome = self.geocoder.geocode(search_query).await;

        if let Outcome::Found(record) = &outcome {
            self.repository.insert(search_query, record).await?;
            self.warm_cache(search_query, record).await;
            info!(
                "Cached location {:?} -> {}",
                search_query, record.formatted_query
            );
        }

        record_lookup(LocationSource::Provider);
        Ok((outcome, LocationSource::Provider))
    }

    async fn warm_cache(&self, search_query: &str, record: &LocationRecord) {
        if let Err(e) = self.cache.set_location(search_query, record, None).await {
            warn!("Failed to cache location {:?}: {}", search_query, e);
        }
    }
}

fn record_lookup(source: LocationSource) {
    metrics::counter!("location_lookups_total", "source" => source.as_str()).increment(1);
}
