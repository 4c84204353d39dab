//! # Resolver Crate
//!
//! This crate resolves a picker selection to its precomputed similar-song
//! recommendations.
//!
//! ## Components
//!
//! ### Resolve
//! Name lookup plus list concatenation:
//! - Each selected track contributes its stored list, in selection order
//! - Duplicates across selected tracks are preserved
//! - A missing name fails the whole pass fast
//!
//! ### Labels
//! Cosmetic cleanup of serialization artifacts before a segment is shown as a
//! button label. The stored data is never rewritten.
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::SongTable;
//! use resolver::{resolve_labeled, display_label};
//!
//! let table = SongTable::load_from_csv(path)?;
//!
//! let selected = vec!["Flowers".to_string(), "Anti-Hero".to_string()];
//! for rec in resolve_labeled(&table, &selected)? {
//!     println!("{} (via {})", rec.label, rec.source_track);
//! }
//! ```

// Public modules
pub mod error;
pub mod labels;
pub mod resolve;
pub mod types;

// Re-export commonly used items
pub use error::{ResolveError, Result};
pub use labels::display_label;
pub use resolve::{resolve, resolve_labeled};
pub use types::Recommendation;
