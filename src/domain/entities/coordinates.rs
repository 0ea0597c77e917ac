//! Coordinate pair shared by the weather and business lookups.

use serde::{Deserialize, Serialize};

/// A resolved latitude/longitude pair.
///
/// Weather and business lookups take this explicitly instead of reaching for
/// a previously resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Formats the pair as `lat,lng`, the path segment form used by forecast APIs.
    pub fn as_path_segment(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_path_segment() {
        let coords = Coordinates::new(47.6062, -122.3321);
        assert_eq!(coords.as_path_segment(), "47.6062,-122.3321");
    }
}
