use anyhow::Result;
use colored::Colorize;
use roi_calculator::config::{self, Config};
use roi_calculator::logging::mask_url;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with endpoint credentials masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Lead mode: {:?}", cfg.leads.mode);
    println!("  CORS origins: {}", cfg.server.cors_origins.len());

    info!("Configuration validation successful");
    Ok(())
}

/// Mask credentials embedded in the lead endpoint URL
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.leads.endpoint = mask_url(&sanitized.leads.endpoint);
    sanitized
}
