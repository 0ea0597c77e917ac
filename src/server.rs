//! HTTP server initialization and runtime setup.
//!
//! Builds the location store, cache tier and provider adapters, wires them
//! into [`AppState`] and runs the Axum server until shutdown.

use crate::application::services::{DiscoveryService, LocationService};
use crate::config::Config;
use crate::domain::repositories::LocationRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{MemoryLocationRepository, PgLocationRepository};
use crate::infrastructure::providers::{
    DarkSkyWeather, GoogleGeocoder, TmdbMovies, YelpBusinesses, build_http_client,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Location store (PostgreSQL with migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Provider adapters sharing one HTTP client
/// - Axum HTTP server with graceful shutdown
///
/// The database pool is owned here and closed after the server stops.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = match &config.database_url {
        Some(url) => Some(connect_database(url, &config).await?),
        None => None,
    };

    let repository: Arc<dyn LocationRepository> = match &pool {
        Some(pool) => Arc::new(PgLocationRepository::new(Arc::new(pool.clone()))),
        None => Arc::new(MemoryLocationRepository::new()),
    };

    if !config.is_store_persistent() {
        tracing::warn!("No database configured, resolved locations are kept in memory");
    }

    let cache = connect_cache(&config).await;

    let http = build_http_client(config.provider_timeout_seconds)
        .context("Failed to build HTTP client")?;

    let geocoder = Arc::new(GoogleGeocoder::new(
        http.clone(),
        &config.geocoding.base_url,
        &config.geocoding.api_key,
    ));
    let weather = Arc::new(DarkSkyWeather::new(
        http.clone(),
        &config.weather.base_url,
        &config.weather.api_key,
    ));
    let businesses = Arc::new(YelpBusinesses::new(
        http.clone(),
        &config.yelp.base_url,
        &config.yelp.api_key,
    ));
    let movies = Arc::new(TmdbMovies::new(
        http,
        &config.movies.base_url,
        &config.movies.api_key,
    ));

    let location_service = Arc::new(LocationService::new(repository, cache, geocoder));
    let discovery_service = Arc::new(DiscoveryService::new(weather, businesses, movies));

    let state = AppState::new(location_service, discovery_service);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("app is up on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database pool closed");
    }

    Ok(())
}

/// Opens the PostgreSQL pool and applies migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn connect_database(database_url: &str, config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Connects the Redis tier, falling back to [`NullCache`] when it is not
/// configured or unreachable.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
