//! SongTable loading and aggregation.
//!
//! This module builds the [`SongTable`] from the dataset file and provides the
//! grouped aggregation that feeds the top-artists chart.

use crate::error::Result;
use crate::parser;
use crate::types::{SongRecord, SongTable};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::info;

impl SongTable {
    /// Load the song dataset from a CSV file.
    ///
    /// This is the main entry point for startup:
    /// 1. Parse the CSV into song records (recommendations split here)
    /// 2. Build the table and its name index
    ///
    /// The returned table is immutable for the rest of the process lifetime.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        info!("Loading song dataset from {}", path.display());
        let start = Instant::now();

        let songs = parser::parse_songs(path)?;

        let mut table = SongTable::new();
        for song in songs {
            table.insert_row(song);
        }

        info!(
            "Loaded {} songs ({} distinct track names) in {:.2?}",
            table.len(),
            table.name_index.len(),
            start.elapsed()
        );
        Ok(table)
    }

    /// Group rows by a key, sum a metric per group, and return the top `n`
    /// groups sorted descending by the summed metric.
    ///
    /// Groups accumulate in a `BTreeMap`, so ties in the summed metric break
    /// by ascending key order and the result is deterministic. Returns at most
    /// `n` entries.
    pub fn top_n_by<K, M>(&self, key_fn: K, metric_fn: M, n: usize) -> Vec<(String, u64)>
    where
        K: Fn(&SongRecord) -> &str + Sync,
        M: Fn(&SongRecord) -> u64 + Sync,
    {
        // Parallel fold into per-thread maps, then merge. Runs only at
        // aggregation time, never on the interaction path.
        let totals: BTreeMap<String, u64> = self
            .rows
            .par_iter()
            .fold(BTreeMap::new, |mut acc, row| {
                *acc.entry(key_fn(row).to_string()).or_insert(0) += metric_fn(row);
                acc
            })
            .reduce(BTreeMap::new, |mut left, right| {
                for (key, value) in right {
                    *left.entry(key).or_insert(0) += value;
                }
                left
            });

        let mut ranked: Vec<(String, u64)> = totals.into_iter().collect();
        // Stable sort: ties keep the ascending key order from the map
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Top `n` artists by total stream count, for the bar chart
    pub fn top_artists_by_streams(&self, n: usize) -> Vec<(String, u64)> {
        self.top_n_by(|row| row.artists.as_str(), |row| row.streams, n)
    }
}
