//! # runecodec-observability
//!
//! Tracing, structured logging, and metrics for RuneCodec.
//!
//! ## Built-in metrics
//! - `runecodec.events_decoded`     — counter, tagged with event_type
//! - `runecodec.events_skipped`     — counter, tagged with event_type
//! - `runecodec.decode_errors`      — counter, tagged with event_type
//! - `runecodec.unknown_attributes` — counter, tagged with event_type
//! - `runecodec.batch_size`         — histogram
//!
//! ## Structured logging
//! JSON-structured logs compatible with ELK, Loki, CloudWatch.
//! Log levels configurable per component.

pub mod metrics;
pub mod reporter;
pub mod tracing_setup;

pub use metrics::RunecodecMetrics;
pub use reporter::TracingReporter;
pub use tracing_setup::{init_tracing, LogConfig};
