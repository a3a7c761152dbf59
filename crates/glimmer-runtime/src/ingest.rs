//! Line-delimited JSON feed on stdin.
//!
//! The mechanism that discovers resources is deliberately outside the
//! core; this runtime takes its feed as JSON lines, one command per line,
//! which makes the binary scriptable and easy to drive from a watch
//! process:
//!
//! ```text
//! {"op":"apply","snapshot":{"namespace":"default","name":"web-0","attributes":{"glimmer/color":"#FF0000"}}}
//! {"op":"delete","namespace":"default","name":"web-0"}
//! ```

use std::sync::Arc;

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

use glimmer_bus::WatchHub;
use glimmer_core::ResourceSnapshot;

/// One feed command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum IngestCommand {
    /// Upsert a resource snapshot.
    Apply { snapshot: ResourceSnapshot },
    /// Report a resource gone.
    Delete { namespace: String, name: String },
}

/// Apply one parsed command to the hub.
pub fn apply_command(hub: &WatchHub, command: IngestCommand) {
    match command {
        IngestCommand::Apply { snapshot } => {
            hub.apply(snapshot);
        }
        IngestCommand::Delete { namespace, name } => {
            if hub.retire(&namespace, &name).is_none() {
                // Feed-side noise, not a tracker invariant: the hub never
                // knew this resource, so downstream state is untouched.
                warn!(namespace = %namespace, name = %name, "Delete for unknown resource ignored");
            }
        }
    }
}

/// Read commands from stdin until EOF or shutdown.
///
/// Malformed lines are logged and skipped; the feed is upstream input,
/// not tracker state, so one bad line must not take the process down.
pub async fn run_stdin_feed(hub: Arc<WatchHub>, mut shutdown: watch::Receiver<bool>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    info!("Stdin feed started");
    loop {
        tokio::select! {
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match serde_json::from_str::<IngestCommand>(line) {
                            Ok(command) => apply_command(&hub, command),
                            Err(e) => warn!(error = %e, "Skipping malformed feed line"),
                        }
                    }
                    Ok(None) => {
                        info!("Stdin feed reached EOF");
                        break;
                    }
                    Err(e) => {
                        warn!(error = %e, "Stdin feed read failed");
                        break;
                    }
                }
            }
        }
    }
    info!("Stdin feed stopped");
}
