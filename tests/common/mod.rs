#![allow(dead_code)]

use best_weather::{
    data::forecast::ForecastSource,
    domain::{
        registry::{LocationRegistry, RegistryEntry},
        weather::Coordinate,
    },
    error::WeatherError,
};

pub const ISLIP: Coordinate = Coordinate::new(40.726_911, -73.218_542);
pub const DUBLIN: Coordinate = Coordinate::new(53.340_350_5, -6.353_470_7);
pub const ANNA_MARIA: Coordinate = Coordinate::new(27.499_887, -82.715_927);

/// Rendered report for Islip (559) over Dublin (373).
pub const TWO_CITY_REPORT: &str = r##"{
 "text": "Results of the best weather competition today are:",
 "attachments": [
  {
   "color": "#00ff00",
   "text": "",
   "fields": [
    {
     "title": "Location",
     "value": "Islip",
     "short": true
    },
    {
     "title": "Score",
     "value": "559",
     "short": true
    },
    {
     "value": "Partly cloudy until afternoon."
    }
   ],
   "thumb_url": ":partly-cloudy-day:"
  },
  {
   "color": "#ff0000",
   "text": "",
   "fields": [
    {
     "value": "Dublin",
     "short": true
    },
    {
     "value": "373",
     "short": true
    },
    {
     "value": "Light rain throughout the day."
    }
   ],
   "thumb_url": ":rain:"
  }
 ]
}"##;

pub struct DayFixture {
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub humidity: f64,
    pub cloud_cover: f64,
    pub precip_probability: f64,
    pub summary: &'static str,
    pub icon: &'static str,
}

pub fn islip_day() -> DayFixture {
    DayFixture {
        temperature_max: 78.4,
        temperature_min: 61.2,
        humidity: 0.55,
        cloud_cover: 0.2,
        precip_probability: 0.1,
        summary: "Partly cloudy until afternoon.",
        icon: "partly-cloudy-day",
    }
}

pub fn dublin_day() -> DayFixture {
    DayFixture {
        temperature_max: 55.0,
        temperature_min: 44.6,
        humidity: 0.86,
        cloud_cover: 0.75,
        precip_probability: 0.6,
        summary: "Light rain throughout the day.",
        icon: "rain",
    }
}

pub fn anna_maria_day() -> DayFixture {
    DayFixture {
        temperature_max: 86.2,
        temperature_min: 72.5,
        humidity: 0.74,
        cloud_cover: 0.1,
        precip_probability: 0.05,
        summary: "Clear throughout the day.",
        icon: "clear-day",
    }
}

pub fn forecast_payload(day: &DayFixture) -> serde_json::Value {
    serde_json::json!({
        "latitude": 40.726911,
        "longitude": -73.218542,
        "timezone": "America/New_York",
        "daily": {
            "summary": "Mixed week ahead.",
            "icon": day.icon,
            "data": [
                {
                    "time": 1_455_771_600,
                    "summary": day.summary,
                    "icon": day.icon,
                    "humidity": day.humidity,
                    "cloudCover": day.cloud_cover,
                    "precipProbability": day.precip_probability,
                    "pressure": 1016.2,
                    "temperatureMax": day.temperature_max,
                    "temperatureMin": day.temperature_min
                },
                {
                    "time": 1_455_858_000,
                    "summary": "Overcast.",
                    "icon": "cloudy",
                    "humidity": 0.9,
                    "cloudCover": 1.0,
                    "precipProbability": 0.2,
                    "temperatureMax": 40.0,
                    "temperatureMin": 30.0
                }
            ]
        }
    })
}

pub fn registry(places: &[(&str, Coordinate)]) -> LocationRegistry {
    LocationRegistry::new(
        places
            .iter()
            .map(|(name, coordinate)| RegistryEntry {
                name: (*name).to_string(),
                coordinate: *coordinate,
            })
            .collect(),
    )
    .expect("valid registry")
}

/// Serves canned forecast documents without touching the network.
pub struct StubSource {
    bodies: Vec<(Coordinate, Vec<u8>)>,
}

impl StubSource {
    pub fn new(days: &[(Coordinate, DayFixture)]) -> Self {
        Self {
            bodies: days
                .iter()
                .map(|(coordinate, day)| {
                    (*coordinate, forecast_payload(day).to_string().into_bytes())
                })
                .collect(),
        }
    }
}

impl ForecastSource for StubSource {
    async fn fetch(&self, coordinate: Coordinate) -> Result<Vec<u8>, WeatherError> {
        self.bodies
            .iter()
            .find(|(c, _)| *c == coordinate)
            .map(|(_, body)| body.clone())
            .ok_or_else(|| WeatherError::Parse(format!("no stub for {coordinate}")))
    }
}
