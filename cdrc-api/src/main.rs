mod api;
mod application;
mod cli;

use crate::application::Application;

use std::future::pending;

use anyhow::Result;
use cdrc_common::{clock::create_clock, config::load_config, persistence::create_storage};
use clap::Parser;
use tokio::{net::TcpListener, signal::ctrl_c};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = cli::Arguments::parse();
    let config = load_config(&args.config)?;

    let clock = create_clock(config.server.utc_offset);
    info!("deciding today by {}", clock.description());

    let cdr = create_storage(&config.database)?;
    info!("using CDR storage: {}", cdr.description());

    let application = Application { cdr, clock };
    let app_service = api::routes(&config.server)?.with_state(application);

    let listener = TcpListener::bind(config.server.bind_address).await?;
    info!("listening on {}", config.server.bind_address);
    axum::serve(listener, app_service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for ctrl-c: {err}");
            pending::<()>().await;
        }
    }
}
