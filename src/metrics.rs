use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the Prometheus recorder and describe all metrics
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {}", e))?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "roi_estimates_total",
        "Total number of ROI estimates computed"
    );
    describe_counter!(
        "roi_leads_total",
        "Total number of lead submissions by outcome"
    );
    describe_histogram!(
        "roi_lead_submit_duration_seconds",
        "Time spent handing a lead to the lead sink"
    );
    describe_gauge!(
        "roi_calculator_info",
        "Service version and build information"
    );

    gauge!("roi_calculator_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record an estimate; `gated` is true when the email gate applies
pub fn record_estimate(gated: bool) {
    counter!(
        "roi_estimates_total",
        "gated" => gated.to_string(),
    )
    .increment(1);
}

/// Record a lead submission outcome ("success", "invalid_email", "rejected", ...)
pub fn record_lead(sink: &str, outcome: &str) {
    counter!(
        "roi_leads_total",
        "sink" => sink.to_string(),
        "outcome" => outcome.to_string(),
    )
    .increment(1);
}

pub fn record_lead_duration(sink: &str, duration: Duration) {
    histogram!(
        "roi_lead_submit_duration_seconds",
        "sink" => sink.to_string(),
    )
    .record(duration.as_secs_f64());
}
