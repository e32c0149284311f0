//! Batch decode request configuration.

use runecodec_core::RawEvent;

/// Controls how the batch engine reacts to individual decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Log and skip events that fail to decode. Suitable for best-effort
    /// analytics.
    #[default]
    Skip,
    /// Collect decode errors alongside successes and return both at the end.
    Collect,
    /// Abort the entire batch on first error.
    Throw,
}

/// Configuration for a batch decode job.
pub struct BatchRequest {
    /// The raw events to decode, in log order.
    pub events: Vec<RawEvent>,
    /// Max events per chunk (memory safety).
    pub chunk_size: usize,
    /// How to handle decode errors.
    pub error_mode: ErrorMode,
    /// Optional progress callback: (decoded_so_far, total).
    pub on_progress: Option<Box<dyn Fn(usize, usize) + Send + Sync>>,
}

impl BatchRequest {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self {
            events,
            chunk_size: 10_000,
            error_mode: ErrorMode::Skip,
            on_progress: None,
        }
    }

    pub fn chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n;
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn on_progress<F: Fn(usize, usize) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }
}
