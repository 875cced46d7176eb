pub mod chart;
pub mod config;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod leads;
pub mod logging;
pub mod metrics;
pub mod report;
pub mod server;
pub mod signals;

/// Initialize tracing/logging with the default level and text output
///
/// The `start` command initializes tracing itself once the configuration
/// (log level, log format) is known.
pub fn init_tracing() {
    logging::init_tracing_with("info", logging::LogFormat::Text);
}
