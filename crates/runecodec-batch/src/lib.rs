//! # runecodec-batch
//!
//! High-throughput batch decode engine for historical log replay.
//!
//! ## Features
//! - Memory-bounded chunking (default 10,000 events per chunk)
//! - CPU-parallel decoding via Rayon
//! - Progress callbacks (for progress bars / ETAs)
//! - Three error modes: Skip, Collect, Throw
//!
//! Decode calls are pure and lock-free, so the engine fans chunks out
//! across worker threads without any coordination beyond the shared
//! unknown-attribute reporter.

pub mod engine;
pub mod request;

pub use engine::{BatchEngine, BatchError, BatchResult};
pub use request::{BatchRequest, ErrorMode};
