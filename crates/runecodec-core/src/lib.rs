//! # runecodec-core
//!
//! Core primitives shared across all RuneCodec crates: the fixed-point coin
//! model, the rune-asset classifier, raw attribute envelopes, the decode
//! error taxonomy, and the unknown-attribute reporter channel. Every event
//! decoder and the batch engine are built on the types defined here.

pub mod asset;
pub mod attr;
pub mod coin;
pub mod error;
pub mod reporter;

pub use asset::is_rune;
pub use attr::{parse_bool, parse_f64, parse_i64, Attribute, RawEvent};
pub use coin::{parse_coin, parse_coin_list, Coin, COIN_SEPARATOR};
pub use error::DecodeError;
pub use reporter::{CollectingReporter, FnReporter, NullReporter, UnknownAttribute, UnknownReporter};
