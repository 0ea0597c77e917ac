//! Normalized records produced by the provider adapters.
//!
//! Each record is a flat projection of exactly one upstream item and is never
//! mutated after construction.
//!
//! # Entity Types
//!
//! - [`LocationRecord`] - A resolved address (the only persisted record)
//! - [`ForecastEntry`] - One day of a daily forecast
//! - [`BusinessListing`] - One business from a local search
//! - [`MovieSummary`] - One movie search result
//! - [`Coordinates`] - The latitude/longitude pair downstream lookups require

pub mod business;
pub mod coordinates;
pub mod forecast;
pub mod location;
pub mod movie;

pub use business::BusinessListing;
pub use coordinates::Coordinates;
pub use forecast::ForecastEntry;
pub use location::LocationRecord;
pub use movie::MovieSummary;
