//! Location entity produced by geocoding.

use serde::{Deserialize, Serialize};

/// A free-text address resolved to coordinates.
///
/// Created either from a cache/store hit (reconstructed from stored columns)
/// or from a fresh geocode call. `short_name` is the first address component
/// of the geocode result and feeds the movie search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub formatted_query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub short_name: String,
}

impl LocationRecord {
    /// Creates a new LocationRecord instance.
    pub fn new(
        formatted_query: String,
        latitude: f64,
        longitude: f64,
        short_name: String,
    ) -> Self {
        Self {
            formatted_query,
            latitude,
            longitude,
            short_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat_fields() {
        let record = LocationRecord::new("Lynnwood, WA, USA".to_string(), 47.8, -122.3, "Lynnwood".to_string());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["formatted_query"], "Lynnwood, WA, USA");
        assert_eq!(json["short_name"], "Lynnwood");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
