#![allow(clippy::cast_possible_truncation)]

use super::weather::DailyWeather;

pub const IDEAL_MAX_TEMP: f64 = 80.0;
pub const IDEAL_MIN_TEMP: f64 = 60.0;
pub const IDEAL_HUMIDITY: f64 = 0.6;

/// Folds a value above `ideal` back below it, so equal distances on either
/// side of the ideal score the same.
#[must_use]
pub fn reflect(value: f64, ideal: f64) -> f64 {
    if value > ideal {
        ideal * 2.0 - value
    } else {
        value
    }
}

#[must_use]
pub fn max_temp_term(temperature_max: f64) -> f64 {
    reflect(temperature_max, IDEAL_MAX_TEMP) + (100.0 - IDEAL_MAX_TEMP)
}

#[must_use]
pub fn min_temp_term(temperature_min: f64) -> f64 {
    reflect(temperature_min, IDEAL_MIN_TEMP) + (100.0 - IDEAL_MIN_TEMP)
}

#[must_use]
pub fn cloud_term(cloud_cover: f64) -> i64 {
    ((1.0 - cloud_cover) * 100.0) as i64
}

#[must_use]
pub fn precip_term(precip_probability: f64) -> i64 {
    ((1.0 - precip_probability) * 100.0) as i64
}

#[must_use]
pub fn humidity_term(humidity: f64) -> i64 {
    (reflect(humidity, IDEAL_HUMIDITY) * 100.0 + 40.0) as i64
}

/// Desirability of one forecast day; higher is more pleasant.
///
/// The temperature terms stay fractional until the final sum while the other
/// three are truncated on their own, matching the reference scores exactly.
/// Out-of-range inputs saturate instead of overflowing.
#[must_use]
pub fn score(weather: &DailyWeather) -> i64 {
    [
        (max_temp_term(weather.temperature_max) * 2.0) as i64,
        min_temp_term(weather.temperature_min) as i64,
        cloud_term(weather.cloud_cover),
        precip_term(weather.precip_probability),
        humidity_term(weather.humidity),
    ]
    .into_iter()
    .fold(0, i64::saturating_add)
}
