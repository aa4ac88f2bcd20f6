//! Identifier obfuscation.
//!
//! Sequential database IDs leak volume and invite enumeration when exposed
//! in URLs. This module swaps the two 16-bit half-words of a 32-bit value so
//! consecutive IDs map to wildly different numbers, while staying losslessly
//! invertible. The swap is its own inverse, so obfuscating twice returns the
//! original.
//!
//! This is bit rearrangement, not encryption: anyone who knows the scheme
//! can invert it. Use it to discourage casual enumeration, never to hide a
//! value from an adversary.

use tracing::debug;

use crate::error::{Error, Result};

/// Inputs are truncated to this 32-bit domain before the swap.
const WORD_MASK: i64 = 0xFFFF_FFFF;

/// Width of one half-word.
const HALF_BITS: u32 = 16;

/// Obfuscate an identifier by swapping its 16-bit half-words.
///
/// The input is masked to 32 bits first; bits above 31 (including the sign)
/// are discarded. The result is always in `0..=u32::MAX`.
#[must_use]
pub const fn obfuscate(id: i64) -> i64 {
    let v = (id & WORD_MASK) as u32;
    v.rotate_left(HALF_BITS) as i64
}

/// Recover the identifier that [`obfuscate`] mapped to `value`.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the inverse swap yields zero: legitimate
/// identifiers are non-zero, so a zero result means `value` was never
/// produced by [`obfuscate`]. A consequence is that identifier 0 itself can
/// never round-trip.
pub fn deobfuscate(value: i64) -> Result<i64> {
    let id = obfuscate(value);
    if id == 0 {
        debug!(value, "deobfuscation yielded the zero sentinel");
        return Err(Error::Decode { value });
    }
    Ok(id)
}
