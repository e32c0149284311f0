//! Error types for the RuneCodec decode pipeline.

use thiserror::Error;

/// Errors that can occur while decoding a single event's attribute list.
///
/// Every variant names the attribute it was raised for, so the caller can
/// log and skip the one offending event without losing the diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A coin token has no interior space between amount and asset id.
    #[error("no separator in coin value {value:?} of attribute {attribute:?}")]
    MissingSeparator { attribute: String, value: String },

    /// A numeric attribute value is not a valid base-10 signed 64-bit
    /// integer. Overflow lands here too — never silent truncation.
    #[error("malformed integer {value:?} in attribute {attribute:?}")]
    MalformedInteger { attribute: String, value: String },

    /// A floating-point attribute value failed to parse.
    #[error("malformed float {value:?} in attribute {attribute:?}")]
    MalformedFloat { attribute: String, value: String },

    /// A boolean attribute value is neither "true" nor "false".
    #[error("malformed boolean {value:?} in attribute {attribute:?}")]
    MalformedBool { attribute: String, value: String },

    /// A second dynamic transaction-id key appeared where at most one chain
    /// attribution is allowed.
    #[error("conflicting attribution: {attribute:?} after {previous:?}")]
    ConflictingAttribution { attribute: String, previous: String },
}

impl DecodeError {
    /// The attribute key this error was raised for.
    pub fn attribute(&self) -> &str {
        match self {
            DecodeError::MissingSeparator { attribute, .. }
            | DecodeError::MalformedInteger { attribute, .. }
            | DecodeError::MalformedFloat { attribute, .. }
            | DecodeError::MalformedBool { attribute, .. }
            | DecodeError::ConflictingAttribution { attribute, .. } => attribute,
        }
    }
}
