use tracing::{debug, info};

use crate::{
    data::forecast::{ForecastSource, parse_forecast},
    domain::{
        ranking::rank,
        registry::LocationRegistry,
        score::score,
        weather::{Coordinate, DailyWeather, LocationScore},
    },
    error::WeatherError,
    report::{Message, format_report},
};

/// Fetches, parses and scores every registry entry in order.
///
/// The first failure ends the run; no partial result is returned.
pub async fn score_locations<S: ForecastSource>(
    registry: &LocationRegistry,
    source: &S,
) -> Result<Vec<LocationScore>, WeatherError> {
    let mut scores = Vec::with_capacity(registry.len());

    for entry in registry.iter() {
        let weather = fetch_weather(source, entry.coordinate)
            .await
            .map_err(|err| WeatherError::for_location(&entry.name, err))?;

        debug!(location = %entry.name, day = ?weather.day, "parsed forecast");
        let value = score(&weather);
        info!(location = %entry.name, score = value, "scored location");
        scores.push(LocationScore::new(entry.name.clone(), value, &weather));
    }

    Ok(scores)
}

async fn fetch_weather<S: ForecastSource>(
    source: &S,
    coordinate: Coordinate,
) -> Result<DailyWeather, WeatherError> {
    let body = source.fetch(coordinate).await?;
    parse_forecast(&body)
}

/// Scores, ranks and formats one competition.
pub async fn run_competition<S: ForecastSource>(
    registry: &LocationRegistry,
    source: &S,
) -> Result<Message, WeatherError> {
    let scores = score_locations(registry, source).await?;
    let ranked = rank(scores);
    if let Some(winner) = ranked.first() {
        info!(location = %winner.location, score = winner.score, "best weather today");
    }
    Ok(format_report(&ranked))
}
