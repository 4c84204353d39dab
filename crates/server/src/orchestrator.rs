//! # Dashboard Orchestrator
//!
//! This module runs the one synchronous pass behind every dashboard
//! interaction:
//! 1. Take the picker's new selection
//! 2. Resolve the precomputed recommendations for it
//! 3. Commit the selection to the session (only if resolution succeeded)
//! 4. Recompute the top-artists chart series
//! 5. Return the assembled view for the surface to render
//!
//! Everything reads from the immutable song table; nothing here blocks on I/O
//! or needs a lock.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::session::SessionContext;
use dataset::SongTable;
use resolver::{resolve_labeled, Recommendation, ResolveError};

/// How many artists the chart shows
pub const TOP_ARTISTS_LIMIT: usize = 10;

/// One bar of the top-artists chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistStreams {
    pub artist: String,
    pub streams: u64,
}

/// Everything a dashboard surface needs to render one interaction pass
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Distinct track names for the picker, sorted for stable output
    pub track_choices: Vec<String>,
    /// Resolved recommendations for the session's selection, in order
    pub recommendations: Vec<Recommendation>,
    /// Chart series: top artists by summed stream count
    pub top_artists: Vec<ArtistStreams>,
}

/// Coordinates the song table, resolver, and per-session state
#[derive(Clone)]
pub struct DashboardOrchestrator {
    table: Arc<SongTable>,
}

impl DashboardOrchestrator {
    /// Create an orchestrator over a loaded table
    pub fn new(table: Arc<SongTable>) -> Self {
        Self { table }
    }

    /// The shared song table
    pub fn table(&self) -> &Arc<SongTable> {
        &self.table
    }

    /// Distinct track names, sorted so the picker renders stably
    pub fn track_choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = self
            .table
            .distinct_track_names()
            .into_iter()
            .map(String::from)
            .collect();
        choices.sort();
        choices
    }

    /// Chart series: top `limit` artists by total streams
    pub fn top_artists(&self, limit: usize) -> Vec<ArtistStreams> {
        self.table
            .top_artists_by_streams(limit)
            .into_iter()
            .map(|(artist, streams)| ArtistStreams { artist, streams })
            .collect()
    }

    /// Handle a selection-changed event from the picker.
    ///
    /// Resolution runs against the incoming selection first; the session is
    /// only updated when it succeeds, so a selection naming a missing track
    /// leaves the session on its last good state.
    ///
    /// # Arguments
    /// * `session` - The session that changed its selection
    /// * `selected` - The picker's new ordered selection
    pub fn handle_selection_changed(
        &self,
        session: &mut SessionContext,
        selected: Vec<String>,
    ) -> Result<DashboardView, ResolveError> {
        let start = Instant::now();

        let recommendations = resolve_labeled(&self.table, &selected)?;
        session.set_selection(selected);

        info!(
            "Resolved {} recommendations for {} selected tracks in {:.2?}",
            recommendations.len(),
            session.selected().len(),
            start.elapsed()
        );

        Ok(self.assemble_view(recommendations))
    }

    /// Re-render the view for a session without changing its selection
    pub fn view(&self, session: &SessionContext) -> Result<DashboardView, ResolveError> {
        let recommendations = resolve_labeled(&self.table, session.selected())?;
        Ok(self.assemble_view(recommendations))
    }

    fn assemble_view(&self, recommendations: Vec<Recommendation>) -> DashboardView {
        DashboardView {
            track_choices: self.track_choices(),
            recommendations,
            top_artists: self.top_artists(TOP_ARTISTS_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::SongRecord;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Create a minimal test table with a few songs and stored recommendations
    fn build_test_table() -> Arc<SongTable> {
        let mut table = SongTable::new();

        table.insert_row(SongRecord {
            track_name: "Flowers".to_string(),
            artists: "Miley Cyrus".to_string(),
            streams: 1_316_855_716,
            recommendations: vec!["['Kill Bill'".to_string(), " 'Creepin']".to_string()],
        });
        table.insert_row(SongRecord {
            track_name: "Anti-Hero".to_string(),
            artists: "Taylor Swift".to_string(),
            streams: 999_748_277,
            recommendations: vec!["['Unholy']".to_string()],
        });
        table.insert_row(SongRecord {
            track_name: "Cruel Summer".to_string(),
            artists: "Taylor Swift".to_string(),
            streams: 800_000_000,
            recommendations: vec!["['August'".to_string(), " 'Lover']".to_string()],
        });

        Arc::new(table)
    }

    fn selection(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // ============================================================================
    // Unit Tests: handle_selection_changed
    // ============================================================================

    #[test]
    fn test_selection_changed_resolves_in_order() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let mut session = SessionContext::new();

        let view = orchestrator
            .handle_selection_changed(&mut session, selection(&["Flowers", "Anti-Hero"]))
            .expect("selection should resolve");

        let raw: Vec<&str> = view.recommendations.iter().map(|r| r.raw.as_str()).collect();
        assert_eq!(raw, vec!["['Kill Bill'", " 'Creepin']", "['Unholy']"]);
        assert_eq!(view.recommendations[0].source_track, "Flowers");
        assert_eq!(view.recommendations[2].source_track, "Anti-Hero");
    }

    #[test]
    fn test_selection_changed_commits_session_on_success() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let mut session = SessionContext::new();

        orchestrator
            .handle_selection_changed(&mut session, selection(&["Anti-Hero"]))
            .unwrap();
        assert_eq!(session.selected(), &["Anti-Hero".to_string()]);
    }

    #[test]
    fn test_missing_track_keeps_last_good_selection() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let mut session = SessionContext::new();

        orchestrator
            .handle_selection_changed(&mut session, selection(&["Flowers"]))
            .unwrap();

        let err = orchestrator
            .handle_selection_changed(&mut session, selection(&["missing_track"]))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::TrackNotFound {
                name: "missing_track".to_string()
            }
        );

        // Session still renders from its last good selection
        assert_eq!(session.selected(), &["Flowers".to_string()]);
        let view = orchestrator.view(&session).unwrap();
        assert_eq!(view.recommendations.len(), 2);
    }

    #[test]
    fn test_empty_selection_yields_empty_recommendations() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let mut session = SessionContext::new();

        let view = orchestrator
            .handle_selection_changed(&mut session, Vec::new())
            .expect("empty selection is not an error");

        assert!(view.recommendations.is_empty());
        // Chart and picker render regardless of the selection
        assert!(!view.top_artists.is_empty());
        assert!(!view.track_choices.is_empty());
    }

    // ============================================================================
    // Unit Tests: view assembly
    // ============================================================================

    #[test]
    fn test_track_choices_are_sorted_and_distinct() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let choices = orchestrator.track_choices();

        assert_eq!(choices, vec!["Anti-Hero", "Cruel Summer", "Flowers"]);
    }

    #[test]
    fn test_top_artists_sums_per_artist_and_sorts() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let top = orchestrator.top_artists(TOP_ARTISTS_LIMIT);

        // Taylor Swift has two rows, so she aggregates past Miley Cyrus
        assert_eq!(top[0].artist, "Taylor Swift");
        assert_eq!(top[0].streams, 999_748_277 + 800_000_000);
        assert_eq!(top[1].artist, "Miley Cyrus");
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_top_artists_respects_limit() {
        let orchestrator = DashboardOrchestrator::new(build_test_table());
        let top = orchestrator.top_artists(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].artist, "Taylor Swift");
    }
}
