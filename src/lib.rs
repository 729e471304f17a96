pub mod config;
pub mod models;
pub mod pipeline; // Measurement extraction from report text
pub mod intelligence; // Risk classification + topic knowledge
pub mod tools; // Agent-facing tool adapters

use tracing_subscriber::EnvFilter;

pub use intelligence::{classify_measurements, lookup_topic, ClassificationResult};
pub use models::{Measurement, MeasurementStatus, RiskLevel, TopicRecord};
pub use pipeline::extraction::extract_measurements;

/// Install the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(config::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::info!("{} v{} tracing initialised", config::APP_NAME, config::APP_VERSION);
    }
}

/// Extract measurements from report text and classify them.
/// Never fails: unrecognised lines are skipped and an empty report is "all normal".
pub fn extract_and_classify(text: &str) -> ClassificationResult {
    let measurements: Vec<Measurement> = extract_measurements(text).collect();
    tracing::debug!(count = measurements.len(), "Extracted measurements");
    classify_measurements(&measurements)
}
