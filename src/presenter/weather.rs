//! Weather card presenter
//!
//! Turns a [`WeatherReading`] into display labels. The first label is always
//! `Temperature: {temp}°C`; the optional measurements only produce a label
//! when the reading carries them.

use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::{format_celsius, format_instant, format_number, machine_instant};
use super::Render;
use crate::domain::WeatherReading;

/// Which measurement a label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    Temperature,
    Humidity,
    FeelsLike,
    TempMin,
    TempMax,
}

impl LabelKind {
    /// CSS class used in the HTML rendering
    pub fn css_class(&self) -> &'static str {
        match self {
            LabelKind::Temperature => "temperature",
            LabelKind::Humidity => "humidity",
            LabelKind::FeelsLike => "feels-like",
            LabelKind::TempMin => "temp-min",
            LabelKind::TempMax => "temp-max",
        }
    }
}

/// One rendered measurement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub kind: LabelKind,
    pub text: String,
}

impl Label {
    fn new(kind: LabelKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Presented weather card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCard {
    /// Temperature label first, then whichever details are present
    pub labels: Vec<Label>,
    /// `Updated: ...` line
    pub updated: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherCard {
    /// The primary `Temperature: ...` label
    pub fn temperature(&self) -> &str {
        self.labels
            .iter()
            .find(|l| l.kind == LabelKind::Temperature)
            .map(|l| l.text.as_str())
            .unwrap_or_default()
    }

    /// Labels after the primary one
    pub fn details(&self) -> impl Iterator<Item = &Label> {
        self.labels
            .iter()
            .filter(|l| l.kind != LabelKind::Temperature)
    }

    /// Observation instant for `<time datetime>`
    pub fn observed_iso(&self) -> String {
        machine_instant(&self.observed_at)
    }

    pub fn observed_display(&self) -> String {
        format_instant(&self.observed_at)
    }
}

#[derive(Template)]
#[template(path = "weather_card.html")]
struct WeatherCardTemplate<'a> {
    card: &'a WeatherCard,
    details: Vec<&'a Label>,
}

/// Present a weather reading as a card
pub fn present_weather(reading: &WeatherReading) -> WeatherCard {
    let mut labels = vec![
        Label::new(
            LabelKind::Temperature,
            format!("Temperature: {}", format_celsius(reading.temp)),
        ),
        Label::new(
            LabelKind::Humidity,
            format!("Humidity: {}%", format_number(reading.humidity)),
        ),
    ];

    if let Some(v) = reading.feels_like {
        labels.push(Label::new(
            LabelKind::FeelsLike,
            format!("Feels like: {}", format_celsius(v)),
        ));
    }
    if let Some(v) = reading.temp_min {
        labels.push(Label::new(LabelKind::TempMin, format!("Min: {}", format_celsius(v))));
    }
    if let Some(v) = reading.temp_max {
        labels.push(Label::new(LabelKind::TempMax, format!("Max: {}", format_celsius(v))));
    }

    WeatherCard {
        labels,
        updated: format!("Updated: {}", format_instant(&reading.at)),
        observed_at: reading.at,
    }
}

impl Render for WeatherCard {
    fn render_text(&self) -> String {
        let mut lines: Vec<&str> = self.labels.iter().map(|l| l.text.as_str()).collect();
        lines.push(self.updated.as_str());
        lines.join("\n")
    }

    fn render_html(&self) -> askama::Result<String> {
        WeatherCardTemplate {
            card: self,
            details: self.details().collect(),
        }
        .render()
    }
}
