//! Daily forecast entry.

use chrono::DateTime;
use serde::Serialize;

/// Format of [`ForecastEntry::time`], e.g. `Tue Oct 17 2026`.
pub const FORECAST_DATE_FORMAT: &str = "%a %b %d %Y";

/// One day of a daily forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastEntry {
    pub forecast: String,
    pub time: String,
}

impl ForecastEntry {
    /// Builds an entry from a summary and a unix timestamp in seconds.
    ///
    /// The date is the UTC calendar day of `unix_time`. Returns `None` when the
    /// timestamp is outside the representable range.
    pub fn from_unix(summary: String, unix_time: i64) -> Option<Self> {
        let date = DateTime::from_timestamp(unix_time, 0)?;

        Some(Self {
            forecast: summary,
            time: date.format(FORECAST_DATE_FORMAT).to_string(),
        })
    }
}
