//! Lighthearted fallback lines for recoverable lookup failures.
//!
//! When a lookup misses or no path was supplied, callers answer with a
//! kaomoji instead of a bare error. Selection is a hash of the query so
//! the same input always gets the same face; transports stay testable
//! and the core stays free of hidden state.

use std::hash::{DefaultHasher, Hash, Hasher};

/// The fallback faces.
pub const LINES: [&str; 5] = [
    "( \u{0361}\u{00b0} \u{035c}\u{0296} \u{0361}\u{00b0})",
    "( \u{2727}\u{2256} \u{035c}\u{0296}\u{2256})",
    "(\u{0361} \u{0361}\u{00b0} \u{035c} \u{3064} \u{0361}\u{0361}\u{00b0})",
    "( \u{0360}\u{00b0} \u{035c}\u{0296} \u{00b0})",
    "( \u{0361}\u{00b0}( \u{0361}\u{00b0} \u{035c}\u{0296}( \u{0361}\u{00b0} \u{035c}\u{0296} \u{0361}\u{00b0})\u{0296} \u{0361}\u{00b0}) \u{0361}\u{00b0})",
];

/// Picks a fallback line deterministically from a seed.
pub fn pick(seed: &str) -> &'static str {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let idx = (hasher.finish() % LINES.len() as u64) as usize;
    LINES[idx]
}
