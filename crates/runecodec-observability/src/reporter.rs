//! Production unknown-attribute reporter.

use crate::metrics::RunecodecMetrics;
use runecodec_core::UnknownReporter;
use tracing::warn;

/// Reports unknown attributes through `tracing`, optionally bumping the
/// `runecodec.unknown_attributes` counter.
///
/// The tracing sink is already thread-safe, so one instance can back any
/// number of concurrent decode calls.
#[derive(Default, Clone)]
pub struct TracingReporter {
    metrics: Option<RunecodecMetrics>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: RunecodecMetrics) -> Self {
        Self {
            metrics: Some(metrics),
        }
    }
}

impl UnknownReporter for TracingReporter {
    fn report(&self, event_type: &str, key: &str, value: &str) {
        warn!(event_type, key, value, "unknown event attribute");
        if let Some(metrics) = &self.metrics {
            metrics.record_unknown_attribute(event_type);
        }
    }
}
