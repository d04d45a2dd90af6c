//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks. Everything in
//! it is read-only after startup.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::router::RouteTable;
use crate::snapshot::Snapshot;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Events and weather loaded at startup
    pub snapshot: Arc<Snapshot>,
    /// Path → view mapping
    pub routes: Arc<RouteTable>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(snapshot: Snapshot, routes: RouteTable, config: ApiConfig) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            routes: Arc::new(routes),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
