use anyhow::Result;
use colored::Colorize;
use roi_calculator::{
    config,
    logging::{init_tracing_with, LogFormat},
    server,
};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// This will:
/// 1. Load configuration
/// 2. Initialize tracing with the configured level and format
/// 3. Start the server (blocks until shutdown)
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting ROI calculator...".green());

    let cfg = config::load_config(config_path)?;

    init_tracing_with(
        &cfg.server.log_level,
        LogFormat::from_config(&cfg.server.log_format),
    );
    info!(config = %config_path.display(), "Configuration loaded");

    server::start_server(cfg, config_path.to_path_buf()).await
}
