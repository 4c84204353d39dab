//! Core domain types for the song dataset.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the per-row [`SongRecord`] and the in-memory [`SongTable`] that
//! every other crate reads from.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Type Aliases
// =============================================================================

/// Index of a row within the table, in file order
pub type RowId = usize;

// =============================================================================
// Song Record
// =============================================================================

/// A single song entry from the dataset.
///
/// `recommendations` is normalized at load time: the source column stores the
/// list as one comma-delimited string, so it is split exactly once when the
/// table is built. The stored segments keep whatever serialization artifacts
/// the column carried (leading spaces, bracket and quote characters); display
/// cleanup belongs to the view layer, not the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Track name, used as the lookup key by the picker
    pub track_name: String,
    /// Artist name(s), as stored (multiple artists share one field)
    pub artists: String,
    /// Total stream count
    pub streams: u64,
    /// Precomputed similar-song list, split from the source column
    pub recommendations: Vec<String>,
}

// =============================================================================
// SongTable - The Core In-Memory Table
// =============================================================================

/// Main data structure holding all songs and the lookup index.
///
/// The table is built once at startup and never mutated afterwards; it is
/// shared read-only (behind an `Arc`) across every session, so no locking is
/// needed on the interaction path.
///
/// Track names are not unique in practice. Lookups resolve to the first row in
/// file order that carries the name, which is also the row the picker entry
/// refers to.
#[derive(Debug)]
pub struct SongTable {
    /// All rows, in file order
    pub(crate) rows: Vec<SongRecord>,
    /// Track name -> first row carrying it
    pub(crate) name_index: HashMap<String, RowId>,
}

impl SongTable {
    /// Creates a new, empty SongTable
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    // Getters - these return references, the table stays owned by the index

    /// Look up a track by name.
    ///
    /// Returns the first matching row in file order, or `None` if no row
    /// carries the name.
    pub fn get_track(&self, name: &str) -> Option<&SongRecord> {
        self.name_index.get(name).map(|&row_id| &self.rows[row_id])
    }

    /// All distinct track names, set semantics.
    ///
    /// No ordering guarantee; callers that need stable output (the picker)
    /// sort the result themselves.
    pub fn distinct_track_names(&self) -> HashSet<&str> {
        self.name_index.keys().map(String::as_str).collect()
    }

    /// All rows in file order
    pub fn rows(&self) -> &[SongRecord] {
        &self.rows
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // Mutators - used only while the table is being built

    /// Append a row and index its track name.
    ///
    /// The first row carrying a given name wins the index slot; later
    /// duplicates stay in `rows` (they still count towards aggregations) but
    /// are not reachable by name lookup.
    pub fn insert_row(&mut self, record: SongRecord) {
        let row_id = self.rows.len();
        self.name_index
            .entry(record.track_name.clone())
            .or_insert(row_id);
        self.rows.push(record);
    }
}

impl Default for SongTable {
    fn default() -> Self {
        Self::new()
    }
}
