//! Core data types for the dashboard
//!
//! This module defines the values the presenters consume:
//! - `DateTime`: a single absolute instant
//! - `Event` and `EventList`: calendar entries in display order
//! - `WeatherReading`: a snapshot of weather measurements
//!
//! Shapes are checked once, when a value is constructed or decoded. Consumers
//! may assume a value they receive is valid.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::{DomainError, DomainResult};

/// A single absolute instant, as calendar payloads carry it (`{"dateTime": ...}`)
///
/// Offsets in the input are normalized to UTC when decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTime {
    pub date_time: chrono::DateTime<Utc>,
}

impl DateTime {
    pub fn new(instant: chrono::DateTime<Utc>) -> Self {
        Self { date_time: instant }
    }

    /// The wrapped instant
    pub fn instant(&self) -> chrono::DateTime<Utc> {
        self.date_time
    }
}

impl From<chrono::DateTime<Utc>> for DateTime {
    fn from(instant: chrono::DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

/// A single calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    /// Unique, non-empty identifier
    pub id: String,
    /// Human-readable title, may be empty
    pub summary: String,
    /// When the event starts
    pub start: DateTime,
}

/// Wire shape of an event before validation
#[derive(Deserialize)]
struct RawEvent {
    id: String,
    // Calendar APIs omit the summary of untitled events.
    #[serde(default)]
    summary: String,
    start: DateTime,
}

impl TryFrom<RawEvent> for Event {
    type Error = DomainError;

    fn try_from(raw: RawEvent) -> DomainResult<Self> {
        let event = Event {
            id: raw.id,
            summary: raw.summary,
            start: raw.start,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Event {
    pub fn new(id: impl Into<String>, summary: impl Into<String>, start: impl Into<DateTime>) -> Self {
        Self {
            id: id.into(),
            summary: summary.into(),
            start: start.into(),
        }
    }

    /// Check the shape contract of this event
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::EmptyEventId);
        }
        Ok(())
    }
}

/// Ordered collection of events as supplied for display
///
/// Order is display order. Nothing here sorts by start time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawEventList")]
pub struct EventList {
    items: Vec<Event>,
}

#[derive(Deserialize)]
struct RawEventList {
    #[serde(default)]
    items: Vec<Event>,
}

impl TryFrom<RawEventList> for EventList {
    type Error = DomainError;

    fn try_from(raw: RawEventList) -> DomainResult<Self> {
        EventList::new(raw.items)
    }
}

impl EventList {
    /// Build a list, rejecting invalid events and duplicate ids
    pub fn new(items: Vec<Event>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for event in &items {
            event.validate()?;
            if !seen.insert(event.id.as_str()) {
                return Err(DomainError::DuplicateEventId(event.id.clone()));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an event by id
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A snapshot of weather measurements at a point in time
///
/// Temperatures are in °C. No ordering is enforced between `temp_min`,
/// `temp` and `temp_max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawWeatherReading")]
pub struct WeatherReading {
    pub temp: f64,
    /// Relative humidity, 0-100
    pub humidity: f64,
    /// When the reading was taken
    pub at: chrono::DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_max: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeatherReading {
    temp: f64,
    humidity: f64,
    at: chrono::DateTime<Utc>,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
}

impl TryFrom<RawWeatherReading> for WeatherReading {
    type Error = DomainError;

    fn try_from(raw: RawWeatherReading) -> DomainResult<Self> {
        let reading = WeatherReading {
            temp: raw.temp,
            humidity: raw.humidity,
            at: raw.at,
            feels_like: raw.feels_like,
            temp_min: raw.temp_min,
            temp_max: raw.temp_max,
        };
        reading.validate()?;
        Ok(reading)
    }
}

impl WeatherReading {
    /// Create a reading with only the required measurements
    pub fn new(temp: f64, humidity: f64, at: chrono::DateTime<Utc>) -> Self {
        Self {
            temp,
            humidity,
            at,
            feels_like: None,
            temp_min: None,
            temp_max: None,
        }
    }

    /// Builder method: set the apparent temperature
    pub fn feels_like(mut self, value: f64) -> Self {
        self.feels_like = Some(value);
        self
    }

    /// Builder method: set the minimum temperature
    pub fn temp_min(mut self, value: f64) -> Self {
        self.temp_min = Some(value);
        self
    }

    /// Builder method: set the maximum temperature
    pub fn temp_max(mut self, value: f64) -> Self {
        self.temp_max = Some(value);
        self
    }

    /// Check the shape contract of this reading
    pub fn validate(&self) -> DomainResult<()> {
        check_finite("temp", self.temp)?;
        check_finite("humidity", self.humidity)?;
        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(DomainError::HumidityOutOfRange(self.humidity));
        }

        let optional = [
            ("feelsLike", self.feels_like),
            ("tempMin", self.temp_min),
            ("tempMax", self.temp_max),
        ];
        for (field, value) in optional {
            if let Some(v) = value {
                check_finite(field, v)?;
            }
        }

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> DomainResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DomainError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 2, 1, 1, 0, 0).unwrap()
    }

    #[test]
    fn test_event_decoding() {
        let json = r#"{"id": "1", "summary": "do a thing", "start": {"dateTime": "2022-02-01T01:00:00Z"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.summary, "do a thing");
        assert_eq!(event.start.instant(), instant());
    }

    #[test]
    fn test_event_offset_normalized_to_utc() {
        let json = r#"{"id": "1", "summary": "x", "start": {"dateTime": "2022-02-01T02:00:00+01:00"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.start.instant(), instant());
    }

    #[test]
    fn test_event_ignores_unknown_fields() {
        let json = r#"{"kind": "calendar#event", "etag": "\"abc\"", "id": "1", "summary": "s",
                       "start": {"dateTime": "2022-02-01T01:00:00Z", "timeZone": "UTC"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.summary, "s");
    }

    #[test]
    fn test_event_missing_start_rejected() {
        let json = r#"{"id": "1", "summary": "no start"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn test_event_empty_id_rejected() {
        let json = r#"{"id": "", "summary": "s", "start": {"dateTime": "2022-02-01T01:00:00Z"}}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());

        let event = Event::new("", "s", instant());
        assert_eq!(event.validate(), Err(DomainError::EmptyEventId));
    }

    #[test]
    fn test_event_missing_summary_is_empty() {
        let json = r#"{"id": "1", "start": {"dateTime": "2022-02-01T01:00:00Z"}}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.summary, "");
    }

    #[test]
    fn test_event_list_keeps_order() {
        let later = Event::new("b", "later", instant() + chrono::Duration::hours(5));
        let earlier = Event::new("a", "earlier", instant());
        let list = EventList::new(vec![later.clone(), earlier.clone()]).unwrap();

        let ids: Vec<_> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(list.get("a"), Some(&earlier));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_event_list_rejects_duplicates() {
        let result = EventList::new(vec![
            Event::new("1", "one", instant()),
            Event::new("1", "again", instant()),
        ]);
        assert_eq!(result, Err(DomainError::DuplicateEventId("1".to_string())));
    }

    #[test]
    fn test_event_list_decoding() {
        let json = r#"{"items": [
            {"id": "1", "summary": "first", "start": {"dateTime": "2022-02-01T01:00:00Z"}},
            {"id": "2", "summary": "second", "start": {"dateTime": "2022-01-01T01:00:00Z"}}
        ]}"#;
        let list: EventList = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].summary, "first");

        let empty: EventList = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_weather_decoding_optional_fields() {
        let json = r#"{"temp": 20, "humidity": 90, "at": "2022-02-01T01:00:00Z"}"#;
        let reading: WeatherReading = serde_json::from_str(json).unwrap();

        assert_eq!(reading.temp, 20.0);
        assert_eq!(reading.feels_like, None);
        assert_eq!(reading.temp_min, None);
        assert_eq!(reading.temp_max, None);

        let json = r#"{"temp": 20, "humidity": 90, "at": "2022-02-01T01:00:00Z",
                       "feelsLike": 19.5, "tempMin": 15, "tempMax": 25}"#;
        let reading: WeatherReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.feels_like, Some(19.5));
        assert_eq!(reading.temp_min, Some(15.0));
        assert_eq!(reading.temp_max, Some(25.0));
    }

    #[test]
    fn test_weather_serialization_omits_absent_fields() {
        let reading = WeatherReading::new(20.0, 90.0, instant());
        let json = serde_json::to_string(&reading).unwrap();
        assert!(!json.contains("feelsLike"));
        assert!(!json.contains("tempMin"));
    }

    #[test]
    fn test_weather_validation() {
        let reading = WeatherReading::new(-4.5, 40.0, instant())
            .feels_like(-9.0)
            .temp_min(10.0)
            .temp_max(-20.0);
        // min above max is display-only, not rejected
        assert!(reading.validate().is_ok());

        let reading = WeatherReading::new(20.0, 120.0, instant());
        assert_eq!(reading.validate(), Err(DomainError::HumidityOutOfRange(120.0)));

        let reading = WeatherReading::new(20.0, 50.0, instant()).feels_like(f64::INFINITY);
        assert!(matches!(
            reading.validate(),
            Err(DomainError::NonFinite { field: "feelsLike", .. })
        ));
    }

    #[test]
    fn test_weather_decoding_rejects_out_of_range_humidity() {
        let json = r#"{"temp": 20, "humidity": 101, "at": "2022-02-01T01:00:00Z"}"#;
        assert!(serde_json::from_str::<WeatherReading>(json).is_err());
    }
}
