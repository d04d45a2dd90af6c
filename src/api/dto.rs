//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.
//! Built from presenter output so JSON and HTML always agree.

use serde::Serialize;

use crate::presenter::format::machine_instant;
use crate::presenter::{Agenda, AgendaItem, Label, Render, WeatherCard};
use crate::router::{RouteTable, View};

// ============================================
// AGENDA DTOs
// ============================================

/// A presented agenda item
#[derive(Debug, Serialize)]
pub struct AgendaItemDto {
    pub id: String,
    pub summary: String,
    /// Start in the display format
    pub when: String,
    /// Start as RFC 3339
    pub start: String,
    /// Rendered HTML fragment
    pub html: String,
}

impl TryFrom<&AgendaItem> for AgendaItemDto {
    type Error = askama::Error;

    fn try_from(item: &AgendaItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.clone(),
            summary: item.summary.clone(),
            when: item.when.clone(),
            start: machine_instant(&item.start),
            html: item.render_html()?,
        })
    }
}

/// Agenda response, items in input order
#[derive(Debug, Serialize)]
pub struct AgendaResponse {
    pub count: usize,
    pub items: Vec<AgendaItemDto>,
}

impl TryFrom<&Agenda> for AgendaResponse {
    type Error = askama::Error;

    fn try_from(agenda: &Agenda) -> Result<Self, Self::Error> {
        Ok(Self {
            count: agenda.items.len(),
            items: agenda
                .items
                .iter()
                .map(AgendaItemDto::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

// ============================================
// WEATHER DTOs
// ============================================

/// A presented weather card
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    /// `Temperature: ...` label
    pub temperature: String,
    /// All labels, temperature first
    pub labels: Vec<Label>,
    pub updated: String,
    /// Observation time as RFC 3339
    pub observed_at: String,
    /// Rendered HTML fragment
    pub html: String,
}

impl TryFrom<&WeatherCard> for WeatherResponse {
    type Error = askama::Error;

    fn try_from(card: &WeatherCard) -> Result<Self, Self::Error> {
        Ok(Self {
            temperature: card.temperature().to_string(),
            labels: card.labels.clone(),
            updated: card.updated.clone(),
            observed_at: machine_instant(&card.observed_at),
            html: card.render_html()?,
        })
    }
}

// ============================================
// ROUTE DTOs
// ============================================

/// One route table entry
#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub path: String,
    pub view: View,
    pub title: String,
}

/// Route table listing
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteDto>,
}

impl From<&RouteTable> for RoutesResponse {
    fn from(table: &RouteTable) -> Self {
        Self {
            routes: table
                .entries()
                .map(|(path, view)| RouteDto {
                    path: path.to_string(),
                    view,
                    title: view.title().to_string(),
                })
                .collect(),
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Events in the loaded snapshot
    pub events: usize,
    /// Whether the snapshot has a weather reading
    pub has_weather: bool,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
