//! Raw event attributes and shared attribute-value parsers.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// One key/value pair from an event's attribute list.
///
/// Keys and values are opaque byte-strings on the wire; the upstream layer
/// hands them over as UTF-8. Duplicates are permitted — within one list the
/// later occurrence of a key wins, a quirk of the upstream chain's log
/// format that is preserved intentionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A raw, undecoded event as read from the chain's execution log.
/// This is the input to every decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event-type name — selects which decoder is invoked.
    pub event_type: String,
    /// Ordered attribute list; order matters only for last-write-wins.
    pub attributes: Vec<Attribute>,
    /// Block height this event was logged at. Diagnostics only — decoding
    /// never consults it.
    #[serde(default)]
    pub block_height: u64,
    /// Position of the owning transaction within the block. Diagnostics only.
    #[serde(default)]
    pub tx_index: u32,
}

impl RawEvent {
    pub fn new(event_type: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes,
            block_height: 0,
            tx_index: 0,
        }
    }
}

// ─── Attribute-value parsers ──────────────────────────────────────────────────

/// Parse a signed 64-bit decimal attribute value.
/// Overflow is a decode error, never silent truncation.
pub fn parse_i64(attribute: &str, value: &str) -> Result<i64, DecodeError> {
    value
        .parse::<i64>()
        .map_err(|_| DecodeError::MalformedInteger {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

/// Parse a 64-bit floating-point attribute value.
pub fn parse_f64(attribute: &str, value: &str) -> Result<f64, DecodeError> {
    value
        .parse::<f64>()
        .map_err(|_| DecodeError::MalformedFloat {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

/// Parse a boolean attribute value. Exactly `"true"` or `"false"` — the
/// upstream log never emits other spellings.
pub fn parse_bool(attribute: &str, value: &str) -> Result<bool, DecodeError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DecodeError::MalformedBool {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }),
    }
}
