//! HTTP layer translating requests into service calls.
//!
//! # Modules
//!
//! - [`dto`] - Query parameter parsing
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
