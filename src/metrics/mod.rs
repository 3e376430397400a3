// Metrics module for Prometheus observability

mod registry;

pub use registry::{
    gather_metrics,
    REQUESTS_TOTAL,
    REQUEST_DURATION,
    UPSTREAM_CALLS,
    UPSTREAM_DURATION,
    VALIDATION_REJECTIONS,
};

/// Helper to record request metrics
pub fn record_request(endpoint: &str, status_code: u16, duration_secs: f64) {
    REQUESTS_TOTAL
        .with_label_values(&[endpoint, &status_code.to_string()])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

/// Helper to record Google API call metrics
pub fn record_upstream_call(api: &str, outcome: &str, duration_secs: f64) {
    UPSTREAM_CALLS.with_label_values(&[api, outcome]).inc();

    UPSTREAM_DURATION
        .with_label_values(&[api])
        .observe(duration_secs);
}

pub fn record_rejection(endpoint: &str, reason: &str) {
    VALIDATION_REJECTIONS.with_label_values(&[endpoint, reason]).inc();
}
