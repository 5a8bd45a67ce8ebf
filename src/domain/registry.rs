use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;

use super::weather::Coordinate;
use crate::error::WeatherError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

/// The places competing in a run, in the order they are fetched.
///
/// A registry is never empty and never holds the same name twice, so every
/// score in a report maps back to exactly one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRegistry {
    entries: Vec<RegistryEntry>,
}

impl LocationRegistry {
    pub fn new(entries: Vec<RegistryEntry>) -> Result<Self, WeatherError> {
        if entries.is_empty() {
            return Err(WeatherError::Registry(
                "at least one location is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(WeatherError::Registry(format!(
                    "duplicate location name {:?}",
                    entry.name
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn from_json(content: &str) -> Result<Self, WeatherError> {
        let entries: Vec<RegistryEntry> = serde_json::from_str(content)
            .map_err(|err| WeatherError::Registry(format!("invalid locations file: {err}")))?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        let content = fs::read_to_string(path).map_err(|err| {
            WeatherError::Registry(format!("reading {} failed: {err}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        let entries = [
            ("Islip", 40.726_911, -73.218_542),
            ("Bryn Mawr", 40.027_474_3, -75.311_881_3),
            ("Ann Arbor", 42.288_873, -83.746_13),
            ("Dublin", 53.340_350_5, -6.353_470_7),
            ("Greenville", 34.844_068, -82.404_295),
            ("Anna Maria", 27.499_887, -82.715_927),
        ]
        .into_iter()
        .map(|(name, latitude, longitude)| RegistryEntry {
            name: name.to_string(),
            coordinate: Coordinate::new(latitude, longitude),
        })
        .collect();

        Self { entries }
    }
}
