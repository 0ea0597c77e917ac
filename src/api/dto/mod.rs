//! Request parameter parsing and response payloads.
//!
//! Responses are the domain records themselves (they derive `Serialize`);
//! this module only covers the `data` query parameter.

pub mod data_param;

pub use data_param::{DataObject, search_text};
