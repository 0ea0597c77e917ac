//! HTTP request handlers, one per endpoint.

pub mod fallback;
pub mod location;
pub mod movies;
pub mod weather;
pub mod yelp;

pub use fallback::not_found_handler;
pub use location::location_handler;
pub use movies::movies_handler;
pub use weather::weather_handler;
pub use yelp::yelp_handler;
