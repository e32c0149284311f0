//! Asset identifier constants and the rune classifier.
//!
//! Asset ids are opaque byte-strings of the conventional form
//! `"<CHAIN>.<SYMBOL>[-<SUFFIX>]"`. This subsystem never parses them
//! structurally — only exact matching against the compiled constants below.

/// The chain's native settlement asset.
pub const RUNE_NATIVE: &str = "THOR.RUNE";

/// Deprecated main-net BEP2 alias, kept for historical log replay.
pub const RUNE_B1A: &str = "BNB.RUNE-B1A";

/// Deprecated test-net BEP2 alias.
pub const RUNE_67C: &str = "BNB.RUNE-67C";

/// Returns `true` iff `asset` is one of the historical identifiers of the
/// native settlement asset. The set is a compiled constant: extending it is
/// a code change, not configuration.
pub fn is_rune(asset: &str) -> bool {
    matches!(asset, RUNE_NATIVE | RUNE_B1A | RUNE_67C)
}
