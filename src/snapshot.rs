//! Dashboard input snapshot
//!
//! The events and weather the views render, decoded once at startup from the
//! JSON files named in [`DataConfig`]. Producing those files (calendar and
//! weather APIs) happens outside this crate.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::config::{DataConfig, WeatherFormat};
use crate::domain::{CurrentWeather, DomainError, EventList, WeatherReading};

/// Everything the views need to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub events: EventList,
    pub weather: Option<WeatherReading>,
}

impl Snapshot {
    pub fn new(events: EventList, weather: Option<WeatherReading>) -> Self {
        Self { events, weather }
    }

    /// Load the files named in `config`
    ///
    /// An unset path yields an empty agenda or no weather card.
    pub fn load(config: &DataConfig) -> Result<Self, SnapshotError> {
        let events = match &config.events_path {
            Some(path) => load_events(path)?,
            None => EventList::empty(),
        };

        let weather = match &config.weather_path {
            Some(path) => Some(load_weather(path, config.weather_format)?),
            None => None,
        };

        tracing::info!(
            events = events.len(),
            weather = weather.is_some(),
            "Snapshot loaded"
        );

        Ok(Self { events, weather })
    }
}

/// Load an event list file
pub fn load_events(path: &Path) -> Result<EventList, SnapshotError> {
    let events: EventList = read_json(path)?;
    tracing::debug!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

/// Load a weather file in the given format
pub fn load_weather(path: &Path, format: WeatherFormat) -> Result<WeatherReading, SnapshotError> {
    let reading = match format {
        WeatherFormat::Reading => read_json::<WeatherReading>(path)?,
        WeatherFormat::OpenWeather => {
            let current: CurrentWeather = read_json(path)?;
            current
                .into_reading()
                .map_err(|source| SnapshotError::Domain {
                    path: path.to_path_buf(),
                    source,
                })?
        }
    };
    tracing::debug!("Loaded weather reading from {:?}", path);
    Ok(reading)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Snapshot loading errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to read snapshot file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Malformed JSON or a shape violation caught while decoding
    #[error("Failed to parse snapshot file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid data in {path:?}: {source}")]
    Domain {
        path: PathBuf,
        #[source]
        source: DomainError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EVENTS: &str = r#"{"kind": "calendar#events", "items": [
        {"id": "b", "summary": "second", "start": {"dateTime": "2022-02-02T10:00:00Z"}},
        {"id": "a", "summary": "first", "start": {"dateTime": "2022-02-01T10:00:00Z"}}
    ]}"#;

    #[test]
    fn test_empty_config_gives_empty_snapshot() {
        let snapshot = Snapshot::load(&DataConfig::default()).unwrap();

        assert!(snapshot.events.is_empty());
        assert!(snapshot.weather.is_none());
    }

    #[test]
    fn test_load_events_and_reading() {
        let dir = tempdir().unwrap();
        let events_path = dir.path().join("events.json");
        let weather_path = dir.path().join("weather.json");
        std::fs::write(&events_path, EVENTS).unwrap();
        std::fs::write(
            &weather_path,
            r#"{"temp": 20, "humidity": 90, "at": "2022-02-01T09:00:00Z", "tempMax": 25}"#,
        )
        .unwrap();

        let config = DataConfig {
            events_path: Some(events_path),
            weather_path: Some(weather_path),
            weather_format: WeatherFormat::Reading,
        };
        let snapshot = Snapshot::load(&config).unwrap();

        let ids: Vec<_> = snapshot.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let weather = snapshot.weather.unwrap();
        assert_eq!(weather.temp, 20.0);
        assert_eq!(weather.temp_max, Some(25.0));
    }

    #[test]
    fn test_load_openweather() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.json");
        std::fs::write(
            &path,
            r#"{"main": {"temp": -2.5, "feels_like": -6, "humidity": 70}, "dt": 1643706000}"#,
        )
        .unwrap();

        let reading = load_weather(&path, WeatherFormat::OpenWeather).unwrap();
        assert_eq!(reading.temp, -2.5);
        assert_eq!(reading.feels_like, Some(-6.0));
        assert_eq!(reading.temp_min, None);
    }

    #[test]
    fn test_duplicate_ids_fail_to_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"items": [
                {"id": "1", "summary": "x", "start": {"dateTime": "2022-02-01T10:00:00Z"}},
                {"id": "1", "summary": "y", "start": {"dateTime": "2022-02-01T11:00:00Z"}}
            ]}"#,
        )
        .unwrap();

        let err = load_events(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().contains("Duplicate event id: 1"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_events(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_openweather_domain_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("weather.json");
        std::fs::write(&path, r#"{"main": {"temp": 1, "humidity": 300}, "dt": 0}"#).unwrap();

        let err = load_weather(&path, WeatherFormat::OpenWeather).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Domain {
                source: DomainError::HumidityOutOfRange(_),
                ..
            }
        ));
    }
}
