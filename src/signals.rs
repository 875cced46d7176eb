use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};

use crate::{
    config::{self, Config},
    handlers::AppState,
    leads,
    logging::mask_url,
};

/// Shutdown signal types
#[derive(Debug, Clone, Copy)]
pub enum ShutdownSignal {
    /// Graceful shutdown (drain connections, clean up)
    Graceful,
}

/// Setup signal handlers for the server
///
/// Returns a broadcast sender for shutdown signals and a join handle for the signal task
///
/// Handles:
/// - SIGTERM/SIGINT: Graceful shutdown
/// - SIGHUP: Configuration reload
#[cfg(unix)]
pub fn setup_signal_handlers(
    state: AppState,
    config_path: PathBuf,
    http_client: reqwest::Client,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        let (mut sigterm, mut sigint, mut sighup) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) {
            (Ok(term), Ok(int), Ok(hup)) => (term, int, hup),
            _ => {
                error!("Failed to install signal handlers, shutting down");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
                return;
            }
        };

        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("SIGTERM received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sigint.recv() => {
                    info!("SIGINT received, initiating graceful shutdown");
                    let _ = tx_clone.send(ShutdownSignal::Graceful);
                    break;
                }
                _ = sighup.recv() => {
                    info!("SIGHUP received, reloading configuration");
                    if let Err(e) = reload_config(&state, &config_path, &http_client) {
                        error!("Failed to reload configuration: {}", e);
                    } else {
                        info!("Configuration reloaded successfully");
                    }
                }
            }
        }
    });

    (shutdown_tx, handle)
}

/// Windows placeholder - only Ctrl+C, no reload
#[cfg(not(unix))]
pub fn setup_signal_handlers(
    _state: AppState,
    _config_path: PathBuf,
    _http_client: reqwest::Client,
) -> (
    broadcast::Sender<ShutdownSignal>,
    tokio::task::JoinHandle<()>,
) {
    let (shutdown_tx, _) = broadcast::channel(16);
    let tx_clone = shutdown_tx.clone();

    let handle = tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C received, initiating shutdown");
                let _ = tx_clone.send(ShutdownSignal::Graceful);
            }
            Err(e) => {
                error!("Failed to listen for Ctrl+C: {}", e);
            }
        }
    });

    (shutdown_tx, handle)
}

/// Reload configuration and rebuild the lead sink
///
/// If loading or validation fails, the running configuration stays in place.
/// The lead sink and CORS origins apply immediately; settings fixed at
/// startup are only reported.
pub fn reload_config(
    state: &AppState,
    config_path: &Path,
    http_client: &reqwest::Client,
) -> Result<()> {
    let new_config = config::load_config(config_path)?;
    let old_config = state.config.load_full();

    for setting in restart_required_changes(&old_config, &new_config) {
        warn!(setting, "Setting changed, restart required to apply");
    }

    let new_sink = leads::build_sink(&new_config.leads, http_client.clone());
    info!(
        lead_mode = ?new_config.leads.mode,
        lead_endpoint = %mask_url(&new_config.leads.endpoint),
        "New lead sink built"
    );

    state.config.store(Arc::new(new_config));
    state.lead_sink.store(Arc::new(new_sink));

    Ok(())
}

/// Settings read once at startup (listener, tracing subscriber, metrics route)
fn restart_required_changes(old: &Config, new: &Config) -> Vec<&'static str> {
    let mut changed = Vec::new();

    if old.server.host != new.server.host || old.server.port != new.server.port {
        changed.push("server.listen_address");
    }
    if old.server.log_level != new.server.log_level {
        changed.push("server.log_level");
    }
    if old.server.log_format != new.server.log_format {
        changed.push("server.log_format");
    }
    if old.metrics.enabled != new.metrics.enabled {
        changed.push("metrics.enabled");
    }
    if old.metrics.endpoint != new.metrics.endpoint {
        changed.push("metrics.endpoint");
    }

    changed
}
