use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    data::cache::ResponseCache,
    domain::weather::{Coordinate, DailyWeather},
    error::WeatherError,
};

pub const FORECAST_URL: &str = "https://api.forecast.io/forecast";

/// Anything that can hand back the raw forecast document for a coordinate.
pub trait ForecastSource {
    fn fetch(
        &self,
        coordinate: Coordinate,
    ) -> impl Future<Output = Result<Vec<u8>, WeatherError>>;
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: Option<ResponseCache>,
}

impl ForecastClient {
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(WeatherError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            cache: None,
        })
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Option<ResponseCache>) -> Self {
        self.cache = cache;
        self
    }

    #[must_use]
    pub fn request_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/{}/{coordinate}",
            self.base_url.trim_end_matches('/'),
            self.api_key
        )
    }

    async fn download(&self, coordinate: Coordinate, url: &str) -> Result<Vec<u8>, WeatherError> {
        let fetch_error = |source| WeatherError::Fetch { coordinate, source };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(fetch_error)?
            .error_for_status()
            .map_err(fetch_error)?;
        let body = response.bytes().await.map_err(fetch_error)?;

        Ok(body.to_vec())
    }
}

impl ForecastSource for ForecastClient {
    async fn fetch(&self, coordinate: Coordinate) -> Result<Vec<u8>, WeatherError> {
        let url = self.request_url(coordinate);

        if let Some(cache) = &self.cache
            && let Some(body) = cache.get(&url)?
        {
            debug!(%coordinate, "forecast served from cache");
            return Ok(body);
        }

        debug!(%coordinate, "requesting forecast");
        let body = self.download(coordinate, &url).await?;

        if let Some(cache) = &self.cache
            && let Err(err) = cache.put(&url, &body)
        {
            warn!(%coordinate, dir = %cache.dir().display(), "caching forecast failed: {err}");
        }

        Ok(body)
    }
}

/// Decodes a forecast document and returns its first daily record.
pub fn parse_forecast(body: &[u8]) -> Result<DailyWeather, WeatherError> {
    let payload: ForecastResponse =
        serde_json::from_slice(body).map_err(|err| WeatherError::Parse(err.to_string()))?;

    let Some(today) = payload.daily.data.into_iter().next() else {
        return Err(WeatherError::Parse(
            "forecast contains no daily records".to_string(),
        ));
    };

    today.check_ranges()?;

    Ok(DailyWeather {
        day: today.time.and_then(|secs| DateTime::from_timestamp(secs, 0)),
        humidity: today.humidity,
        cloud_cover: today.cloud_cover,
        precip_probability: today.precip_probability,
        temperature_max: today.temperature_max,
        temperature_min: today.temperature_min,
        summary: today.summary,
        icon: today.icon,
    })
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    daily: DailyBlock,
}

#[derive(Debug, Default, Deserialize)]
struct DailyBlock {
    #[serde(default)]
    data: Vec<DailyRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DailyRecord {
    time: Option<i64>,
    humidity: f64,
    cloud_cover: f64,
    precip_probability: f64,
    temperature_max: f64,
    temperature_min: f64,
    summary: String,
    icon: String,
}

/// Fahrenheit bounds well outside anything observed on Earth.
const TEMPERATURE_RANGE: std::ops::RangeInclusive<f64> = -150.0..=200.0;
const RATIO_RANGE: std::ops::RangeInclusive<f64> = 0.0..=1.0;

impl DailyRecord {
    fn check_ranges(&self) -> Result<(), WeatherError> {
        let checks = [
            ("humidity", self.humidity, &RATIO_RANGE),
            ("cloudCover", self.cloud_cover, &RATIO_RANGE),
            ("precipProbability", self.precip_probability, &RATIO_RANGE),
            ("temperatureMax", self.temperature_max, &TEMPERATURE_RANGE),
            ("temperatureMin", self.temperature_min, &TEMPERATURE_RANGE),
        ];

        for (name, value, range) in checks {
            if !range.contains(&value) {
                return Err(WeatherError::Parse(format!(
                    "{name} {value} outside {}..={}",
                    range.start(),
                    range.end()
                )));
            }
        }
        Ok(())
    }
}
