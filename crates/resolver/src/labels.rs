//! Display-label cleanup for stored recommendation segments.
//!
//! The recommendation column carries artifacts from how the list was
//! serialized into it: segments at the ends of a list keep their enclosing
//! bracket, and escaped quotes inside a name show up as doubled single
//! quotes. Cleanup is cosmetic and happens only when a segment is rendered;
//! the stored data is never rewritten.

/// Strip serialization artifacts from a stored segment.
///
/// Removes enclosing `[` / `]` characters and every doubled single-quote
/// sequence (`''`). Nothing else is touched, so a leading space from the
/// delimiter survives exactly as stored.
pub fn display_label(raw: &str) -> String {
    raw.trim_matches(|c| c == '[' || c == ']').replace("''", "")
}
