//! Recommendation resolution over the song table.
//!
//! Resolution is deliberately lookup-shaped: the dataset already carries a
//! precomputed similar-song list per track, so resolving a selection is a name
//! lookup followed by list concatenation. All ordering comes from the caller's
//! selection order and the stored list order.

use crate::error::{ResolveError, Result};
use crate::labels::display_label;
use crate::types::Recommendation;
use dataset::SongTable;
use tracing::debug;

/// Resolve a selection to the raw stored recommendation segments.
///
/// For each selected name, in order, the first matching row's stored list is
/// appended to the output. Duplicates across different selected tracks are
/// preserved. An empty selection resolves to an empty list.
///
/// # Arguments
/// * `table` - The loaded song table
/// * `selected` - Ordered track names from the picker
///
/// # Returns
/// * `Ok(Vec<String>)` - Concatenated segments, selection order preserved
/// * `Err(ResolveError::TrackNotFound)` - A selected name has no row; the
///   whole resolve fails fast
pub fn resolve(table: &SongTable, selected: &[String]) -> Result<Vec<String>> {
    let mut recommendations = Vec::new();
    for name in selected {
        let row = table
            .get_track(name)
            .ok_or_else(|| ResolveError::TrackNotFound { name: name.clone() })?;
        debug!(
            "Resolved '{}' to {} stored recommendations",
            name,
            row.recommendations.len()
        );
        recommendations.extend(row.recommendations.iter().cloned());
    }
    Ok(recommendations)
}

/// Resolve a selection to display-ready recommendations.
///
/// Same lookup and ordering semantics as [`resolve`], but each segment is
/// paired with its cleaned label and the selected track that produced it.
pub fn resolve_labeled(table: &SongTable, selected: &[String]) -> Result<Vec<Recommendation>> {
    let mut recommendations = Vec::new();
    for name in selected {
        let row = table
            .get_track(name)
            .ok_or_else(|| ResolveError::TrackNotFound { name: name.clone() })?;
        recommendations.extend(row.recommendations.iter().map(|raw| Recommendation {
            raw: raw.clone(),
            label: display_label(raw),
            source_track: name.clone(),
        }));
    }
    Ok(recommendations)
}
