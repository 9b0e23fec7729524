// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::timetable_service::TimetableService;
use crate::infrastructure::config::{load_datasource_config, load_timetable_config};
use crate::infrastructure::rest_repository::RestSectionRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let datasource_config = load_datasource_config()?;
    let timetable_config = load_timetable_config()?;
    let axis = Arc::new(timetable_config.axis.to_axis()?);

    // Create repository (infrastructure layer)
    let repository = Arc::new(RestSectionRepository::new(
        datasource_config.datasource.base_url,
        datasource_config.datasource.token,
        Duration::from_secs(datasource_config.datasource.timeout_secs),
    )?);

    // Create services (application layer)
    let timetable_service = TimetableService::new(repository, axis.clone());

    // Create application state
    let state = Arc::new(AppState { timetable_service });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = timetable_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", timetable_config.server.bind))?;
    tracing::info!(
        "Starting smartschedule-timetable on {} ({} days x {} slots)",
        addr,
        axis.days().len(),
        axis.slots().len()
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
