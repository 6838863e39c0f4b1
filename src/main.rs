//! Dashboard worker binary
//!
//! Loads configuration from the environment, starts the poller and runs
//! until ctrl-c. With `DASHBOARD_SNAPSHOT_PATH` set, the assembled page is
//! mirrored to that file after every region update.

use std::process;
use std::sync::{Arc, Mutex};

use tracing_subscriber::{EnvFilter, fmt};

use dashboard_worker::{Config, DashboardClient, DashboardPoller, FileMirror, MemoryRegions, SharedSink};

/// Initialize the tracing subscriber with env-based filtering.
///
/// Reads `RUST_LOG` (or `LOG_LEVEL`) to set the filter, defaulting to
/// `info` when neither is set.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(true).init();
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "invalid configuration");
        process::exit(1);
    }

    let client = match DashboardClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            process::exit(1);
        }
    };

    let sink: SharedSink = match &config.snapshot_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "mirroring dashboard page to file");
            Arc::new(Mutex::new(FileMirror::new(path.clone())))
        }
        None => Arc::new(Mutex::new(MemoryRegions::new())),
    };

    tracing::info!(
        api_base = %config.api_base,
        interval_seconds = config.refresh_interval_seconds,
        "starting dashboard poller"
    );

    let poller = DashboardPoller::new(client, sink, config.refresh_interval());
    let handle = poller.start();

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }

    tracing::info!("shutting down");
    handle.stop().await;
}
