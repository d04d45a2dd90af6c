//! # Dashboard
//!
//! A small personal dashboard: an agenda of calendar events and a weather
//! card, served as routed views.
//!
//! ## Modules
//!
//! - [`domain`]: Event, event list and weather reading types
//! - [`presenter`]: Pure transformations from domain values to display text
//! - [`router`]: Static path → view table
//! - [`view`]: Views composed from presenters
//! - [`snapshot`]: Loading the input data from JSON files
//! - [`api`]: HTTP shell with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use dashboard::domain::{Event, WeatherReading};
//! use dashboard::presenter::{present_event, present_weather, Render};
//! use dashboard::router::{RouteTable, View};
//!
//! let at = Utc.with_ymd_and_hms(2022, 2, 1, 1, 0, 0).unwrap();
//!
//! let card = present_weather(&WeatherReading::new(20.0, 90.0, at));
//! assert!(card.render_text().contains("Temperature: 20°C"));
//!
//! let item = present_event(&Event::new("1", "do a thing", at));
//! assert!(item.render_html().unwrap().contains("do a thing"));
//!
//! let routes = RouteTable::new();
//! assert_eq!(routes.resolve("/calendarlist"), Some(View::CalendarList));
//! assert_eq!(routes.resolve("/nonexistent"), None);
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod presenter;
pub mod router;
pub mod snapshot;
pub mod view;

// Re-export top-level types for convenience
pub use domain::{DateTime, DomainError, DomainResult, Event, EventList, WeatherReading};

pub use presenter::{
    present_agenda, present_event, present_weather, Agenda, AgendaItem, Render, WeatherCard,
};

pub use router::{RouteTable, View};

pub use view::{render_document, render_view, Page};

pub use snapshot::{Snapshot, SnapshotError};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig, WeatherFormat};
