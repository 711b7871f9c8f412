//! Quakemap entry point.
//!
//! Fetches the USGS earthquake feed once, turns every event into a circle
//! marker sized by magnitude and colored by depth, and writes a standalone
//! Leaflet page with a layer toggle and a depth legend.
//!
//! # Run Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration (defaults, `quakemap.toml`, `QUAKEMAP_*`)
//! 3. Fetch and decode the feed
//! 4. Build markers and the map document
//! 5. Write the page to the configured output
//!
//! A failure at any step is logged and ends the run with a non-zero exit
//! status. Nothing is rendered when the fetch fails.

mod config;
mod error;
mod pipeline;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppError;

/// Application entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("quakemap starting");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Fetch { source }) => {
            error!(error = %source, "error fetching earthquake data");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "quakemap failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    // 2. Load configuration.
    let config = AppConfig::load()?;
    info!(
        feed_url = config.feed_url,
        output = config.output,
        request_timeout_secs = config.request_timeout().map(|t| t.as_secs()),
        "configuration loaded"
    );

    // 3-4. Fetch, transform, render.
    let document = pipeline::build_document(&config).await?;

    // 5. Mount.
    pipeline::mount_document(&document, &config)
}
