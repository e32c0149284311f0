//! `BatchEngine` — orchestrates chunked, parallel batch decoding.

use crate::request::{BatchRequest, ErrorMode};
use rayon::prelude::*;
use runecodec_core::UnknownReporter;
use runecodec_events::{decode_raw, Event, EventError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Error aborting a batch in [`ErrorMode::Throw`].
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: EventError,
    },
}

/// Result of a batch decode job.
#[derive(Debug)]
pub struct BatchResult {
    /// Successfully decoded events, in input order.
    pub events: Vec<Event>,
    /// (original_index, error) pairs — only populated in Collect mode.
    pub errors: Vec<(usize, EventError)>,
    /// Total raw events processed.
    pub total_input: usize,
}

/// Batch decode engine.
///
/// Each event decode is a pure function of its input, so chunks fan out
/// across the Rayon pool without coordination; the reporter is the single
/// shared sink and must tolerate concurrent invocation.
pub struct BatchEngine {
    reporter: Arc<dyn UnknownReporter>,
}

impl BatchEngine {
    pub fn new(reporter: Arc<dyn UnknownReporter>) -> Self {
        Self { reporter }
    }

    /// Execute a batch decode request.
    pub fn decode(&self, req: BatchRequest) -> Result<BatchResult, BatchError> {
        let total_input = req.events.len();
        info!(
            total = total_input,
            chunk_size = req.chunk_size,
            "BatchEngine: decoding batch"
        );

        let mut events: Vec<Event> = Vec::with_capacity(total_input);
        let mut errors: Vec<(usize, EventError)> = Vec::new();
        let mut offset = 0usize;

        for chunk in req.events.chunks(req.chunk_size.max(1)) {
            let decoded: Vec<Result<Event, EventError>> = chunk
                .par_iter()
                .map(|raw| decode_raw(raw, self.reporter.as_ref()))
                .collect();

            for (local_idx, result) in decoded.into_iter().enumerate() {
                match result {
                    Ok(event) => events.push(event),
                    Err(err) => match req.error_mode {
                        ErrorMode::Skip => {
                            warn!(index = offset + local_idx, error = %err, "skipping event");
                        }
                        ErrorMode::Collect => errors.push((offset + local_idx, err)),
                        ErrorMode::Throw => {
                            return Err(BatchError::ItemFailed {
                                index: offset + local_idx,
                                source: err,
                            });
                        }
                    },
                }
            }

            offset += chunk.len();
            if let Some(cb) = &req.on_progress {
                cb(events.len(), total_input);
            }
        }

        info!(
            decoded = events.len(),
            errors = errors.len(),
            "BatchEngine: complete"
        );

        Ok(BatchResult {
            events,
            errors,
            total_input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runecodec_core::{Attribute, CollectingReporter, NullReporter, RawEvent};

    fn pool_event(asset: &str) -> RawEvent {
        RawEvent::new(
            "pool",
            vec![
                Attribute::new("pool", asset),
                Attribute::new("pool_status", "Enabled"),
            ],
        )
    }

    fn malformed_gas_event() -> RawEvent {
        RawEvent::new("gas", vec![Attribute::new("asset_amt", "junk")])
    }

    fn batch_with_one_bad() -> Vec<RawEvent> {
        vec![
            pool_event("BNB.BNB"),
            malformed_gas_event(),
            pool_event("BTC.BTC"),
        ]
    }

    #[test]
    fn skip_mode_drops_bad_events() {
        let engine = BatchEngine::new(Arc::new(NullReporter));
        let result = engine
            .decode(BatchRequest::new(batch_with_one_bad()))
            .unwrap();
        assert_eq!(result.total_input, 3);
        assert_eq!(result.events.len(), 2);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn collect_mode_keeps_original_indices() {
        let engine = BatchEngine::new(Arc::new(NullReporter));
        let result = engine
            .decode(BatchRequest::new(batch_with_one_bad()).error_mode(ErrorMode::Collect))
            .unwrap();
        assert_eq!(result.events.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, 1);
    }

    #[test]
    fn throw_mode_aborts_with_index() {
        let engine = BatchEngine::new(Arc::new(NullReporter));
        let err = engine
            .decode(BatchRequest::new(batch_with_one_bad()).error_mode(ErrorMode::Throw))
            .unwrap_err();
        match err {
            BatchError::ItemFailed { index, .. } => assert_eq!(index, 1),
        }
    }

    #[test]
    fn successes_stay_in_input_order_across_chunks() {
        let assets: Vec<String> = (0..50).map(|i| format!("POOL.A{i}")).collect();
        let events: Vec<RawEvent> = assets.iter().map(|a| pool_event(a)).collect();

        let engine = BatchEngine::new(Arc::new(NullReporter));
        let result = engine
            .decode(BatchRequest::new(events).chunk_size(7))
            .unwrap();

        let decoded: Vec<String> = result
            .events
            .iter()
            .map(|e| match e {
                Event::Pool(p) => p.asset.clone(),
                other => panic!("wrong variant: {other:?}"),
            })
            .collect();
        assert_eq!(decoded, assets);
    }

    #[test]
    fn progress_callback_sees_monotonic_counts() {
        use std::sync::Mutex;

        let calls = Arc::new(Mutex::new(Vec::new()));
        let calls_in_cb = Arc::clone(&calls);

        let events: Vec<RawEvent> = (0..30).map(|i| pool_event(&format!("P.{i}"))).collect();
        let engine = BatchEngine::new(Arc::new(NullReporter));
        engine
            .decode(
                BatchRequest::new(events)
                    .chunk_size(10)
                    .on_progress(move |done, total| {
                        calls_in_cb.lock().unwrap().push((done, total));
                    }),
            )
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(*calls, vec![(10, 30), (20, 30), (30, 30)]);
    }

    #[test]
    fn reporter_is_shared_across_workers() {
        let reporter = Arc::new(CollectingReporter::new());
        let events: Vec<RawEvent> = (0..20)
            .map(|i| {
                RawEvent::new(
                    "pool",
                    vec![Attribute::new(format!("mystery{i}"), "x")],
                )
            })
            .collect();

        let engine = BatchEngine::new(Arc::clone(&reporter) as Arc<dyn UnknownReporter>);
        engine.decode(BatchRequest::new(events)).unwrap();
        assert_eq!(reporter.len(), 20);
    }
}
