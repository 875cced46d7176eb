use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `ROI_CALCULATOR__SERVER__PORT=9000`
///
/// `ROI_CALCULATOR__SERVER__CORS_ORIGINS` takes a comma-separated list.
pub const ENV_PREFIX: &str = "ROI_CALCULATOR";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub leads: LeadsConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Where captured leads go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadMode {
    /// POST each lead to `endpoint`
    Forward,
    /// Only log the lead (development)
    Log,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadsConfig {
    #[serde(default = "default_lead_mode")]
    pub mode: LeadMode,
    #[serde(default = "default_lead_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_lead_timeout")]
    pub timeout_seconds: u64,
    /// Simulated latency of the log-only sink
    #[serde(default = "default_log_delay_ms")]
    pub log_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_endpoint")]
    pub endpoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            mode: default_lead_mode(),
            endpoint: default_lead_endpoint(),
            timeout_seconds: default_lead_timeout(),
            log_delay_ms: default_log_delay_ms(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            endpoint: default_metrics_endpoint(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_lead_mode() -> LeadMode {
    LeadMode::Forward
}

fn default_lead_endpoint() -> String {
    "http://localhost:3000/api/leads".to_string()
}

fn default_lead_timeout() -> u64 {
    10
}

fn default_log_delay_ms() -> u64 {
    500
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_endpoint() -> String {
    "/metrics".to_string()
}

/// Load configuration from `path` (if it exists) and the environment
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("server.cors_origins"),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("Invalid server host: {}", cfg.server.host);
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}', expected 'text' or 'json'", other),
    }

    if cfg.leads.mode == LeadMode::Forward {
        if cfg.leads.endpoint.is_empty() {
            anyhow::bail!("Lead endpoint must be set when leads.mode = \"forward\"");
        }
        if !cfg.leads.endpoint.starts_with("http://") && !cfg.leads.endpoint.starts_with("https://") {
            anyhow::bail!("Lead endpoint must be an http(s) URL: {}", cfg.leads.endpoint);
        }
        if cfg.leads.timeout_seconds == 0 {
            anyhow::bail!("leads.timeout_seconds must be greater than zero");
        }
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/': {}", cfg.metrics.endpoint);
    }

    Ok(())
}
