//! Glimmer controller entry point.
//!
//! Startup sequence:
//!
//! 1. Load configuration from `GLIMMER_*` environment variables
//! 2. Initialize tracing
//! 3. Build the watch hub, console strip, and controller
//! 4. Spawn the resync sweep and the stdin feed
//! 5. Run the dispatch loop until Ctrl-C or a fatal handling error
//! 6. Clean up the display exactly once and exit

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use glimmer_bus::{run_resync, WatchHub};
use glimmer_core::{derive_key, Controller};

use glimmer_runtime::classify::classify_color;
use glimmer_runtime::config::GlimmerConfig;
use glimmer_runtime::ingest::run_stdin_feed;
use glimmer_runtime::strip::ConsoleStrip;
use glimmer_runtime::{dispatch, DispatchError};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting tracing subscriber")?;

    let config = GlimmerConfig::from_env().context("loading configuration")?;

    info!("===========================================");
    info!("  Glimmer Controller v0.1.0");
    info!("===========================================");
    info!(
        brightness = config.brightness,
        resync_secs = config.resync_period.as_secs(),
        channel_capacity = config.channel_capacity,
        "Configuration loaded"
    );

    let hub = Arc::new(WatchHub::with_capacity(config.channel_capacity));
    let controller = Arc::new(Controller::new(
        Box::new(ConsoleStrip::new()),
        config.brightness,
        Box::new(derive_key),
        Box::new(classify_color),
    ));

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

    // Termination signal flips the shutdown channel; the loops drain out.
    {
        let shutdown_tx = shutdown_tx.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Termination signal received, stopping the controller");
                let _ = shutdown_tx.send(true);
            }
        });
    }

    let resync_task = tokio::spawn(run_resync(
        hub.clone(),
        config.resync_period,
        shutdown_rx.clone(),
    ));
    let feed_task = tokio::spawn(run_stdin_feed(hub.clone(), shutdown_rx.clone()));

    info!("Starting the Glimmer controller");
    let outcome = dispatch::run(&controller, &hub, shutdown_rx).await;

    // Stop the helper tasks before touching the display one last time.
    let _ = shutdown_tx.send(true);
    let _ = resync_task.await;
    feed_task.abort();

    controller.cleanup().context("display cleanup failed")?;

    match outcome {
        Ok(()) => {
            info!("Glimmer controller stopped");
            Ok(())
        }
        Err(e @ DispatchError::Controller(_)) => {
            error!(error = %e, "Fatal dispatch error");
            Err(e.into())
        }
    }
}
