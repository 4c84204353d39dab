//! # Dataset Crate
//!
//! This crate handles loading and indexing the top-songs dataset.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (SongRecord, SongTable)
//! - **parser**: Parse the dataset CSV into Rust structs
//! - **index**: Load the table and run grouped aggregations
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::SongTable;
//! use std::path::Path;
//!
//! // Load the entire dataset once at startup
//! let table = SongTable::load_from_csv(Path::new("data/spotify_recs_2023.csv"))?;
//!
//! // Query data
//! let names = table.distinct_track_names();
//! let row = table.get_track("Flowers").unwrap();
//! let top = table.top_artists_by_streams(10);
//!
//! println!("{} has {} stored recommendations", row.track_name, row.recommendations.len());
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use types::{RowId, SongRecord, SongTable};
