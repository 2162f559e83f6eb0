//! # Outlet Service
//!
//! Order-management service for a food outlet, built on a type-safe generic actor framework.
//!
//! ## Core Components
//!
//! - **[catalog_actor](outlet_service::catalog_actor)**: Menu items, upserted by name.
//! - **[ledger_actor](outlet_service::ledger_actor)**: Orders and their delivery progression.
//! - **[clients](outlet_service::clients)**: Type-safe wrappers that hide the message passing.
//! - **[lifecycle](outlet_service::lifecycle)**: Actor wiring and the periodic status sweep.
//! - **[api](outlet_service::api)**: The HTTP routes.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info outlet-service --bind 127.0.0.1:3000 --sweep-interval-secs 60
//! ```

use actor_framework::tracing::setup_tracing;
use anyhow::Context;
use clap::Parser;
use outlet_service::api::{spawn_api_server, ApiState};
use outlet_service::config::ServiceConfig;
use outlet_service::lifecycle::OutletSystem;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServiceConfig::parse();
    info!(?config, "Starting outlet service");

    let system = OutletSystem::new(&config);
    let state = Arc::new(ApiState::new(
        system.catalog_client.clone(),
        system.order_client.clone(),
    ));
    let server = spawn_api_server(state, config.bind)?;
    info!(address = %server.addr(), "Server running");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("Shutdown requested");

    // The server owns the API's client clones; stop it before the actors.
    server.shutdown().await?;
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Outlet service stopped");
    Ok(())
}
