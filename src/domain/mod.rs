//! Dashboard domain types
//!
//! - **types**: `DateTime`, `Event`, `EventList`, `WeatherReading`
//! - **openweather**: conversion from OpenWeatherMap payloads
//! - **error**: contract violations raised at construction time

pub mod error;
pub mod openweather;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use openweather::{CurrentWeather, MainMeasurements};
pub use types::{DateTime, Event, EventList, WeatherReading};
