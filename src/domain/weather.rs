use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// One forecast day, reduced to the metrics the scorer reads.
///
/// Ratios (`humidity`, `cloud_cover`, `precip_probability`) are in `0.0..=1.0`,
/// temperatures are degrees Fahrenheit.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWeather {
    pub day: Option<DateTime<Utc>>,
    pub humidity: f64,
    pub cloud_cover: f64,
    pub precip_probability: f64,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub summary: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationScore {
    pub location: String,
    pub score: i64,
    pub summary: String,
    pub icon: String,
}

impl LocationScore {
    pub fn new(location: impl Into<String>, score: i64, weather: &DailyWeather) -> Self {
        Self {
            location: location.into(),
            score,
            summary: weather.summary.clone(),
            icon: weather.icon.clone(),
        }
    }

    /// Icon reference rendered as a chat emoji shortcode, e.g. `:rain:`.
    #[must_use]
    pub fn emoji(&self) -> String {
        format!(":{}:", self.icon)
    }
}
