//! Data Routes
//!
//! JSON access to the presented snapshot.
//!
//! - GET /api/v1/agenda - Agenda items in input order
//! - GET /api/v1/weather - Weather card (404 when there is no reading)
//! - GET /api/v1/routes - Route table entries

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AgendaResponse, RoutesResponse, WeatherResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::presenter::{present_agenda, present_weather};

/// GET /api/v1/agenda
pub async fn get_agenda(State(state): State<Arc<AppState>>) -> ApiResult<Json<AgendaResponse>> {
    let agenda = present_agenda(&state.snapshot.events);
    Ok(Json(AgendaResponse::try_from(&agenda)?))
}

/// GET /api/v1/weather
pub async fn get_weather(State(state): State<Arc<AppState>>) -> ApiResult<Json<WeatherResponse>> {
    let reading = state
        .snapshot
        .weather
        .as_ref()
        .ok_or_else(|| ApiError::NotFound("no weather reading loaded".to_string()))?;

    let card = present_weather(reading);
    Ok(Json(WeatherResponse::try_from(&card)?))
}

/// GET /api/v1/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse::from(state.routes.as_ref()))
}
