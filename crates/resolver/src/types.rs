//! Types produced by recommendation resolution.

use serde::{Deserialize, Serialize};

/// One resolved recommendation, ready for a surface to render.
///
/// `raw` is the stored segment exactly as it sits in the table;
/// `label` is the cleaned display text; `source_track` is the selected track
/// whose stored list produced this entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub raw: String,
    pub label: String,
    pub source_track: String,
}
