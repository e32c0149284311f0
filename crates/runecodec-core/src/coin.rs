//! Fixed-point amounts and wire-format coin parsing.
//!
//! ## Wire formats
//! - Fixed-point amount: ASCII decimal integer, optionally signed, value
//!   scaled by 1e8; must fit in `i64`.
//! - Single coin token: `"<amount><SP><asset-id>"`.
//! - Coin list: tokens joined by the literal two-byte separator `", "`.

use crate::attr::parse_i64;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed separator between coin tokens in a list attribute.
pub const COIN_SEPARATOR: &str = ", ";

/// A quantity of one asset, scaled by 1e8.
///
/// Never fractional at the representation layer: `e8 = value * 100_000_000`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Opaque asset identifier, e.g. `"BTC.BTC"`.
    pub asset: String,
    /// Signed quantity scaled by 1e8.
    pub e8: i64,
}

impl Coin {
    pub fn new(asset: impl Into<String>, e8: i64) -> Self {
        Self {
            asset: asset.into(),
            e8,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.e8, self.asset)
    }
}

/// Parse one `"<amount> <asset>"` coin token.
///
/// Splits on the first interior space byte; everything after it is the asset
/// id verbatim.
pub fn parse_coin(attribute: &str, token: &str) -> Result<Coin, DecodeError> {
    let (amount, asset) = token
        .split_once(' ')
        .ok_or_else(|| DecodeError::MissingSeparator {
            attribute: attribute.to_string(),
            value: token.to_string(),
        })?;
    Ok(Coin {
        asset: asset.to_string(),
        e8: parse_i64(attribute, amount)?,
    })
}

/// Parse a `", "`-separated coin list, left to right.
///
/// Each token is parsed independently; the first malformed token fails the
/// whole list.
pub fn parse_coin_list(attribute: &str, value: &str) -> Result<Vec<Coin>, DecodeError> {
    value
        .split(COIN_SEPARATOR)
        .map(|token| parse_coin(attribute, token))
        .collect()
}
