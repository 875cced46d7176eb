use roi_calculator::config::{load_config, LeadMode};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> anyhow::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_config_without_file_uses_defaults() -> anyhow::Result<()> {
    let config = load_config(Path::new("/nonexistent/roi-calculator.toml"))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.leads.mode, LeadMode::Forward);
    assert_eq!(config.leads.timeout_seconds, 10);
    assert!(config.metrics.enabled);
    Ok(())
}

#[test]
fn test_load_config_with_partial_file() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[server]
port = 9090
log_format = "json"
cors_origins = ["https://shop.example"]

[leads]
mode = "log"
log_delay_ms = 0
"#,
    )?;

    let config = load_config(file.path())?;

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.log_format, "json");
    assert_eq!(config.server.cors_origins, vec!["https://shop.example"]);
    assert_eq!(config.leads.mode, LeadMode::Log);
    assert_eq!(config.leads.log_delay_ms, 0);
    assert_eq!(config.metrics.endpoint, "/metrics");
    Ok(())
}

#[test]
fn test_load_config_rejects_invalid_values() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[leads]
mode = "forward"
endpoint = "ftp://leads.example"
"#,
    )?;

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("http(s) URL"));
    Ok(())
}

#[test]
fn test_load_config_rejects_unknown_lead_mode() -> anyhow::Result<()> {
    let file = write_config(
        r#"
[leads]
mode = "carrier-pigeon"
"#,
    )?;

    assert!(load_config(file.path()).is_err());
    Ok(())
}
