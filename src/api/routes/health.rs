//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Status with snapshot details

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Status with the size of the loaded snapshot.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        events: state.snapshot.events.len(),
        has_weather: state.snapshot.weather.is_some(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::router::RouteTable;
    use crate::snapshot::Snapshot;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_empty_snapshot() {
        let state = AppState::new(Snapshot::default(), RouteTable::new(), ApiConfig::default());
        let Json(health) = full_health(State(Arc::new(state))).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.events, 0);
        assert!(!health.has_weather);
    }
}
