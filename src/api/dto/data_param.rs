//! Parsing of the `data` query parameter.
//!
//! `/location` takes `data` as plain text. The other endpoints take an object
//! that clients send in one of two encodings:
//!
//! - bracketed fields, as jQuery serializes nested objects:
//!   `?data[latitude]=47.6&data[longitude]=-122.3&data[short_name]=Seattle`
//! - a JSON document in a single parameter:
//!   `?data={"latitude":47.6,"longitude":-122.3}`

use serde_json::{Map, Value, json};
use std::collections::HashMap;

use crate::domain::entities::Coordinates;
use crate::error::AppError;

const DATA: &str = "data";

/// Returns the raw `data` search string.
///
/// The value is passed through untouched (it is also the cache key); it is
/// only rejected when missing or blank.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if `data` is missing or blank.
pub fn search_text(params: &HashMap<String, String>) -> Result<String, AppError> {
    match params.get(DATA) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        Some(_) => Err(AppError::bad_request(
            "Query parameter 'data' must not be empty",
            json!({ "param": DATA }),
        )),
        None => Err(AppError::bad_request(
            "Missing query parameter 'data'",
            json!({ "param": DATA }),
        )),
    }
}

/// The `data` object carried by `/weather`, `/yelp` and `/movies` requests.
#[derive(Debug, Clone, PartialEq)]
pub struct DataObject {
    fields: Map<String, Value>,
}

impl DataObject {
    /// Collects the object from either supported encoding.
    ///
    /// A JSON `data` parameter wins over bracketed fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `data` is not a JSON object or no
    /// object fields were sent.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        if let Some(raw) = params.get(DATA) {
            return match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(fields)) => Ok(Self { fields }),
                _ => Err(AppError::bad_request(
                    "Query parameter 'data' must be a JSON object",
                    json!({ "param": DATA }),
                )),
            };
        }

        let fields: Map<String, Value> = params
            .iter()
            .filter_map(|(key, value)| {
                let field = key.strip_prefix("data[")?.strip_suffix(']')?;
                Some((field.to_string(), Value::String(value.clone())))
            })
            .collect();

        if fields.is_empty() {
            return Err(AppError::bad_request(
                "Missing query parameter 'data'",
                json!({ "param": DATA }),
            ));
        }

        Ok(Self { fields })
    }

    /// Reads the `latitude`/`longitude` pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is missing or not a
    /// finite number.
    pub fn coordinates(&self) -> Result<Coordinates, AppError> {
        let latitude = self.number("latitude")?;
        let longitude = self.number("longitude")?;

        Ok(Coordinates::new(latitude, longitude))
    }

    /// Reads the `short_name` field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the field is missing or blank.
    pub fn short_name(&self) -> Result<String, AppError> {
        match self.fields.get("short_name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.clone()),
            _ => Err(AppError::bad_request(
                "Field 'short_name' is required",
                json!({ "field": "short_name" }),
            )),
        }
    }

    fn number(&self, field: &str) -> Result<f64, AppError> {
        let parsed = match self.fields.get(field) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        parsed.filter(|v| v.is_finite()).ok_or_else(|| {
            AppError::bad_request(
                format!("Field '{}' must be a number", field),
                json!({ "field": field }),
            )
        })
    }
}
