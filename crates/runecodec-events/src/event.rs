//! The closed event sum type and dispatch by event-type name.
//!
//! The set of event kinds is fixed, so dispatch is an exhaustive match over
//! one constructor per kind — no runtime type registry. Adding a kind means
//! adding a variant, and the compiler walks every match that needs updating.

use crate::liquidity::{Add, Pool, Stake, Unstake};
use crate::network::{Bond, Errata, Reserve, Rewards, Slash};
use crate::swap::{Fee, Gas, Outbound, Refund, Swap};
use runecodec_core::{Attribute, DecodeError, RawEvent, UnknownReporter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Implemented by every event record.
///
/// `load` fully overwrites the record: it is zeroed first, then populated
/// from the attribute list, so a caller-reused instance never leaks state
/// between decodes.
pub trait EventLoad: Default {
    /// The wire name this record decodes, e.g. `"swap"`.
    const EVENT_TYPE: &'static str;

    fn load(
        &mut self,
        attrs: &[Attribute],
        reporter: &dyn UnknownReporter,
    ) -> Result<(), DecodeError>;
}

/// Errors from the dispatch layer.
#[derive(Debug, Error)]
pub enum EventError {
    /// The event-type name matches none of the known kinds.
    #[error("unrecognized event type {event_type:?}")]
    UnknownEventType { event_type: String },

    /// An attribute of the named event failed to decode.
    #[error("decode of {event_type:?} event failed: {source}")]
    Decode {
        event_type: &'static str,
        #[source]
        source: DecodeError,
    },
}

/// A fully decoded event — the primary output of RuneCodec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "record", rename_all = "lowercase")]
pub enum Event {
    Add(Add),
    Bond(Bond),
    Errata(Errata),
    Fee(Fee),
    Gas(Gas),
    Outbound(Outbound),
    Pool(Pool),
    Refund(Refund),
    Reserve(Reserve),
    Rewards(Rewards),
    Stake(Stake),
    Slash(Slash),
    Swap(Swap),
    Unstake(Unstake),
}

impl Event {
    /// The wire name of this event's kind.
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Add(_) => Add::EVENT_TYPE,
            Event::Bond(_) => Bond::EVENT_TYPE,
            Event::Errata(_) => Errata::EVENT_TYPE,
            Event::Fee(_) => Fee::EVENT_TYPE,
            Event::Gas(_) => Gas::EVENT_TYPE,
            Event::Outbound(_) => Outbound::EVENT_TYPE,
            Event::Pool(_) => Pool::EVENT_TYPE,
            Event::Refund(_) => Refund::EVENT_TYPE,
            Event::Reserve(_) => Reserve::EVENT_TYPE,
            Event::Rewards(_) => Rewards::EVENT_TYPE,
            Event::Stake(_) => Stake::EVENT_TYPE,
            Event::Slash(_) => Slash::EVENT_TYPE,
            Event::Swap(_) => Swap::EVENT_TYPE,
            Event::Unstake(_) => Unstake::EVENT_TYPE,
        }
    }
}

fn load_one<T: EventLoad>(
    attrs: &[Attribute],
    reporter: &dyn UnknownReporter,
) -> Result<T, EventError> {
    let mut record = T::default();
    record
        .load(attrs, reporter)
        .map_err(|source| EventError::Decode {
            event_type: T::EVENT_TYPE,
            source,
        })?;
    Ok(record)
}

/// Decode one attribute list, dispatching on the event-type name.
///
/// Unknown attribute keys go to `reporter` and never fail the decode; a
/// malformed attribute value fails this one event only.
pub fn decode_event(
    event_type: &str,
    attrs: &[Attribute],
    reporter: &dyn UnknownReporter,
) -> Result<Event, EventError> {
    match event_type {
        "add" => Ok(Event::Add(load_one(attrs, reporter)?)),
        "bond" => Ok(Event::Bond(load_one(attrs, reporter)?)),
        "errata" => Ok(Event::Errata(load_one(attrs, reporter)?)),
        "fee" => Ok(Event::Fee(load_one(attrs, reporter)?)),
        "gas" => Ok(Event::Gas(load_one(attrs, reporter)?)),
        "outbound" => Ok(Event::Outbound(load_one(attrs, reporter)?)),
        "pool" => Ok(Event::Pool(load_one(attrs, reporter)?)),
        "refund" => Ok(Event::Refund(load_one(attrs, reporter)?)),
        "reserve" => Ok(Event::Reserve(load_one(attrs, reporter)?)),
        "rewards" => Ok(Event::Rewards(load_one(attrs, reporter)?)),
        "stake" => Ok(Event::Stake(load_one(attrs, reporter)?)),
        "slash" => Ok(Event::Slash(load_one(attrs, reporter)?)),
        "swap" => Ok(Event::Swap(load_one(attrs, reporter)?)),
        "unstake" => Ok(Event::Unstake(load_one(attrs, reporter)?)),
        other => Err(EventError::UnknownEventType {
            event_type: other.to_string(),
        }),
    }
}

/// Decode a [`RawEvent`] envelope. Convenience over [`decode_event`].
pub fn decode_raw(raw: &RawEvent, reporter: &dyn UnknownReporter) -> Result<Event, EventError> {
    decode_event(&raw.event_type, &raw.attributes, reporter)
}
