//! OpenWeatherMap current-weather payloads
//!
//! Decodes the subset of a `/data/2.5/weather?units=metric` response the
//! dashboard needs and converts it into a [`WeatherReading`]. Fetching the
//! payload is left to whoever produces the snapshot file.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::{DomainError, DomainResult};
use super::types::WeatherReading;

/// Top-level current-weather response
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub main: MainMeasurements,
    /// Observation time, seconds since the Unix epoch
    pub dt: i64,
}

/// The `main` block of a current-weather response (metric units)
#[derive(Debug, Clone, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
    pub humidity: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
}

impl CurrentWeather {
    /// Observation instant
    pub fn observed_at(&self) -> DomainResult<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0).ok_or(DomainError::TimestampOutOfRange(self.dt))
    }

    /// Convert into a validated reading
    pub fn into_reading(self) -> DomainResult<WeatherReading> {
        let at = self.observed_at()?;
        let main = self.main;

        let reading = WeatherReading {
            temp: main.temp,
            humidity: main.humidity,
            at,
            feels_like: main.feels_like,
            temp_min: main.temp_min,
            temp_max: main.temp_max,
        };
        reading.validate()?;
        Ok(reading)
    }
}

impl TryFrom<CurrentWeather> for WeatherReading {
    type Error = DomainError;

    fn try_from(current: CurrentWeather) -> DomainResult<Self> {
        current.into_reading()
    }
}
