//! The unknown-attribute side channel.
//!
//! Decoders route every attribute key they do not recognize here and carry
//! on — the channel is observability, never control flow. The reporter is
//! the one shared resource a decode call touches, so implementations must
//! tolerate concurrent invocation.

use std::sync::Mutex;

/// Sink for attributes a decoder did not recognize.
///
/// Passed explicitly into each decode call rather than living in process
/// globals, so tests can capture reports deterministically and concurrent
/// callers never share implicit state.
pub trait UnknownReporter: Send + Sync {
    fn report(&self, event_type: &str, key: &str, value: &str);
}

/// Adapter so closures can be used as reporters.
pub struct FnReporter<F>(pub F);

impl<F: Fn(&str, &str, &str) + Send + Sync> UnknownReporter for FnReporter<F> {
    fn report(&self, event_type: &str, key: &str, value: &str) {
        (self.0)(event_type, key, value)
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl UnknownReporter for NullReporter {
    fn report(&self, _event_type: &str, _key: &str, _value: &str) {}
}

/// One captured unknown-attribute report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAttribute {
    pub event_type: String,
    pub key: String,
    pub value: String,
}

/// Collects reports in memory, in decode order. Intended for tests.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    entries: Mutex<Vec<UnknownAttribute>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything captured so far.
    pub fn take(&self) -> Vec<UnknownAttribute> {
        let mut entries = self.entries.lock().expect("reporter lock poisoned");
        std::mem::take(&mut *entries)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("reporter lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UnknownReporter for CollectingReporter {
    fn report(&self, event_type: &str, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("reporter lock poisoned")
            .push(UnknownAttribute {
                event_type: event_type.to_string(),
                key: key.to_string(),
                value: value.to_string(),
            });
    }
}
