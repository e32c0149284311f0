//! # runecodec-events
//!
//! THORChain execution-log event records and their decoders.
//!
//! ## Event format
//!
//! The chain's log is an ordered sequence of events, each a type name plus a
//! list of `{key, value}` attribute pairs. An upstream dispatcher reads the
//! type name and calls [`decode_event`], which produces one fully populated
//! record of the matching kind or an error naming the offending attribute.
//!
//! ## Decode discipline
//!
//! - Attributes are matched by exact key; unknown keys go to the
//!   [`UnknownReporter`](runecodec_core::UnknownReporter) side channel and
//!   never fail a decode.
//! - Amount fields are fixed-point, scaled by 1e8, parsed as signed 64-bit
//!   decimal integers; overflow is a decode error.
//! - A repeated key is last-write-wins, preserving the upstream log quirk.
//! - Every decode fully overwrites its record; field absence leaves the zero
//!   value and is never an error.
//!
//! Decoders are pure: no I/O, no caches, no blocking. They may be called
//! concurrently from any number of threads; the reporter is the only shared
//! sink.

pub mod event;
pub mod liquidity;
pub mod network;
pub mod swap;

pub use event::{decode_event, decode_raw, Event, EventError, EventLoad};
pub use liquidity::{Add, Pool, Stake, Unstake};
pub use network::{Bond, Errata, Reserve, Rewards, Slash};
pub use swap::{Fee, Gas, Outbound, Refund, Swap};
