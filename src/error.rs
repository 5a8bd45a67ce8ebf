use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::weather::Coordinate;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("building http client failed")]
    Client(#[source] reqwest::Error),

    #[error("forecast request for {coordinate} failed")]
    Fetch {
        coordinate: Coordinate,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected forecast payload: {0}")]
    Parse(String),

    #[error("webhook request failed")]
    Notify(#[source] reqwest::Error),

    #[error("bad http response {0}")]
    NotifyStatus(StatusCode),

    #[error("writing report failed")]
    Output(#[source] std::io::Error),

    #[error("invalid location registry: {0}")]
    Registry(String),

    #[error("reading cache entry {} failed", path.display())]
    Cache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing report failed")]
    Render(#[source] serde_json::Error),

    #[error("scoring {location} failed")]
    Location {
        location: String,
        #[source]
        source: Box<WeatherError>,
    },
}

impl WeatherError {
    pub(crate) fn for_location(location: &str, source: Self) -> Self {
        Self::Location {
            location: location.to_string(),
            source: Box::new(source),
        }
    }

    /// The error with any per-location wrapping removed.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Location { source, .. } => source.root(),
            other => other,
        }
    }
}
