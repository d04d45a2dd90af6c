//! Dashboard Server
//!
//! Run with: cargo run --bin dashboard
//!
//! Configuration is read from the default config locations with `DASHBOARD_*`
//! environment overrides (see `dashboard::config`). `RUST_LOG` overrides the
//! configured log level.

use anyhow::Context;
use dashboard::api::{serve, AppState};
use dashboard::config::Config;
use dashboard::logging::{bootstrap_subscriber, init_tracing};
use dashboard::router::RouteTable;
use dashboard::snapshot::Snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config =
        tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), Config::load_default);
    init_tracing(&config.logging, std::io::stdout).context("failed to initialize logging")?;

    tracing::info!("Starting dashboard v{}", env!("CARGO_PKG_VERSION"));

    let snapshot = Snapshot::load(&config.data).context("failed to load dashboard data")?;
    let routes = RouteTable::new();
    tracing::info!("Serving {} routes", routes.len());

    let state = AppState::new(snapshot, routes, config.api.clone());
    serve(state, &config.api).await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
