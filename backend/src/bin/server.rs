//! Ticket analytics HTTP server binary.
//!
//! Loads configuration, sets up the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin ticket-analytics-server
//!
//! # Forecast with the flat recent-mean strategy on port 5000
//! PROJECTION_STRATEGY=flat_mean PORT=5000 cargo run --bin ticket-analytics-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PROJECTION_STRATEGY`: `linear_trend` (default) or `flat_mean`
//! - `PROJECTION_HORIZON_DAYS`: Forecast length in days (default: 7)
//! - `RUST_LOG`: Log filter directives, e.g. `ticket_analytics=debug` (default: info)
//!
//! Values from `ticket-analytics.toml` are applied first, then the environment.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ticket_analytics::config::Settings;
use ticket_analytics::http::{create_router, AppState};

/// Filter from `RUST_LOG` directives, falling back to `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting ticket analytics server");

    let settings = Settings::load()?;
    info!(
        "Projection strategy: {} ({} day horizon)",
        settings.analytics.projection.strategy, settings.analytics.projection.horizon_days
    );

    let state = AppState::new(settings.analytics.clone());
    let app = create_router(state, &settings.server);

    let addr: SocketAddr = settings.server.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
