//! RuneCodec metrics definitions.
//!
//! All metrics use OpenTelemetry conventions and can be exported to
//! Prometheus, Grafana, Datadog, etc. by whatever pipeline the embedding
//! service configures.

use opentelemetry::{
    metrics::{Counter, Histogram, Meter},
    KeyValue,
};

/// Central metrics handle for RuneCodec.
#[derive(Clone)]
pub struct RunecodecMetrics {
    pub events_decoded: Counter<u64>,
    pub events_skipped: Counter<u64>,
    pub decode_errors: Counter<u64>,
    pub unknown_attributes: Counter<u64>,
    pub batch_size: Histogram<u64>,
}

impl RunecodecMetrics {
    pub fn new(meter: &Meter) -> Self {
        Self {
            events_decoded: meter
                .u64_counter("runecodec.events_decoded")
                .with_description("Total number of successfully decoded events")
                .init(),
            events_skipped: meter
                .u64_counter("runecodec.events_skipped")
                .with_description("Events skipped due to decode failure in Skip mode")
                .init(),
            decode_errors: meter
                .u64_counter("runecodec.decode_errors")
                .with_description("Events that failed to decode")
                .init(),
            unknown_attributes: meter
                .u64_counter("runecodec.unknown_attributes")
                .with_description("Attribute keys no decoder recognized")
                .init(),
            batch_size: meter
                .u64_histogram("runecodec.batch_size")
                .with_description("Number of events in a batch decode request")
                .init(),
        }
    }

    pub fn record_decoded(&self, event_type: &str) {
        self.events_decoded
            .add(1, &[KeyValue::new("event_type", event_type.to_string())]);
    }

    pub fn record_skipped(&self, event_type: &str) {
        self.events_skipped
            .add(1, &[KeyValue::new("event_type", event_type.to_string())]);
    }

    pub fn record_error(&self, event_type: &str) {
        self.decode_errors
            .add(1, &[KeyValue::new("event_type", event_type.to_string())]);
    }

    pub fn record_unknown_attribute(&self, event_type: &str) {
        self.unknown_attributes
            .add(1, &[KeyValue::new("event_type", event_type.to_string())]);
    }

    pub fn record_batch(&self, size: u64) {
        self.batch_size.record(size, &[]);
    }
}
