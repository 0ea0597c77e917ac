//! CLI administration tool for city-explorer.
//!
//! Inspects and prunes the location store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show the most recently cached locations
//! cargo run --bin admin -- locations list --limit 20
//!
//! # Forget a cached search string (exact match)
//! cargo run --bin admin -- locations forget "Seattle"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `REDIS_URL` (optional): also invalidates the hot cache on `forget`

use city_explorer::domain::repositories::LocationRepository;
use city_explorer::infrastructure::cache::{CacheService, RedisCache};
use city_explorer::infrastructure::persistence::PgLocationRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing city-explorer.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect the location store
    Locations {
        #[command(subcommand)]
        action: LocationAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Location store subcommands.
#[derive(Subcommand)]
enum LocationAction {
    /// List stored locations, newest first
    List {
        /// Maximum number of rows to show
        #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(i64).range(1..))]
        limit: i64,
    },

    /// Remove every row stored under an exact search string
    Forget {
        /// Search string exactly as it was received (case and whitespace matter)
        query: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Locations { action } => handle_location_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches location store commands.
async fn handle_location_action(action: LocationAction, pool: &PgPool) -> Result<()> {
    let repo = PgLocationRepository::new(Arc::new(pool.clone()));

    match action {
        LocationAction::List { limit } => list_locations(&repo, limit).await,
        LocationAction::Forget { query, yes } => forget_location(&repo, query, yes).await,
    }
}

async fn list_locations(repo: &PgLocationRepository, limit: i64) -> Result<()> {
    let rows = repo.list(limit).await?;

    if rows.is_empty() {
        println!("{}", "No cached locations".yellow());
        return Ok(());
    }

    println!("{}", "Cached locations".bright_blue().bold());
    println!();

    for row in rows {
        println!(
            "{}  {} -> {} ({:.4}, {:.4}) [{}]",
            row.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            format!("{:?}", row.search_query).bold(),
            row.record.formatted_query,
            row.record.latitude,
            row.record.longitude,
            row.record.short_name.cyan(),
        );
    }

    Ok(())
}

/// Deletes store rows for an exact key and drops the matching Redis entry.
async fn forget_location(
    repo: &PgLocationRepository,
    query: String,
    skip_confirm: bool,
) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Forget every location stored under {:?}?", query))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let removed = repo.delete(&query).await?;

    if let Ok(redis_url) = std::env::var("REDIS_URL") {
        let cache = RedisCache::connect(&redis_url, 1)
            .await
            .context("Failed to connect to Redis")?;
        cache.invalidate(&query).await?;
        println!("{}", "Redis entry invalidated".green());
    }

    if removed == 0 {
        println!("{}", format!("Nothing stored under {:?}", query).yellow());
    } else {
        println!(
            "{}",
            format!("Removed {} row(s) for {:?}", removed, query).green()
        );
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
            if one == 1 {
                println!("{}", "Database connection OK".green());
            }

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
                .fetch_one(pool)
                .await
                .context("locations table missing, run the server once to migrate")?;
            println!("Stored locations: {}", count.to_string().bold());
        }
    }

    Ok(())
}
