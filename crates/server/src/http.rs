//! HTTP surface for the dashboard.
//!
//! Three JSON endpoints back the single-page dashboard:
//! - `GET  /api/tracks`: picker choices
//! - `POST /api/recommendations`: resolve a selection
//! - `GET  /api/top-artists?limit=N`: chart series
//!
//! plus `GET /` serving the embedded page itself. Each request is one
//! synchronous pass over the immutable table with a request-scoped session,
//! so the handlers share nothing mutable and need no locks.

use std::convert::Infallible;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;
use warp::{filters::BoxedFilter, http::StatusCode, Filter, Reply};

use crate::orchestrator::{DashboardOrchestrator, TOP_ARTISTS_LIMIT};
use crate::session::SessionContext;
use resolver::Recommendation;

/// The embedded single-page dashboard
const DASHBOARD_PAGE: &str = include_str!("../assets/dashboard.html");

/// Body of `POST /api/recommendations`
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    /// Ordered track names from the picker
    pub songs: Vec<String>,
}

/// Response body of `POST /api/recommendations`
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

/// Query parameters of `GET /api/top-artists`
#[derive(Debug, Deserialize)]
pub struct TopArtistsQuery {
    pub limit: Option<usize>,
}

/// Error body for failed interactions
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the complete route tree for the dashboard server
pub fn dashboard_filters(orchestrator: Arc<DashboardOrchestrator>) -> BoxedFilter<(impl Reply,)> {
    let with_orchestrator = warp::any().map(move || Arc::clone(&orchestrator));

    let tracks = warp::get()
        .and(warp::path!("api" / "tracks"))
        .and(with_orchestrator.clone())
        .map(|orchestrator: Arc<DashboardOrchestrator>| {
            warp::reply::json(&orchestrator.track_choices())
        });

    let recommendations = warp::post()
        .and(warp::path!("api" / "recommendations"))
        .and(warp::body::json())
        .and(with_orchestrator.clone())
        .and_then(handle_recommendations);

    let top_artists = warp::get()
        .and(warp::path!("api" / "top-artists"))
        .and(warp::query::<TopArtistsQuery>())
        .and(with_orchestrator)
        .map(
            |query: TopArtistsQuery, orchestrator: Arc<DashboardOrchestrator>| {
                let limit = query.limit.unwrap_or(TOP_ARTISTS_LIMIT);
                warp::reply::json(&orchestrator.top_artists(limit))
            },
        );

    let page = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::html(DASHBOARD_PAGE));

    tracks
        .or(recommendations)
        .or(top_artists)
        .or(page)
        .boxed()
}

/// Resolve one selection-changed interaction.
///
/// A missing track maps to `404` with an error body; the server keeps serving.
async fn handle_recommendations(
    request: SelectionRequest,
    orchestrator: Arc<DashboardOrchestrator>,
) -> Result<impl Reply, Infallible> {
    debug!("Selection changed: {:?}", request.songs);

    // Session scoped to the request: the page resends its full selection on
    // every interaction, so nothing persists between requests.
    let mut session = SessionContext::new();
    let reply = match orchestrator.handle_selection_changed(&mut session, request.songs) {
        Ok(view) => warp::reply::with_status(
            warp::reply::json(&RecommendationsResponse {
                recommendations: view.recommendations,
            }),
            StatusCode::OK,
        ),
        Err(err) => warp::reply::with_status(
            warp::reply::json(&ErrorBody {
                error: err.to_string(),
            }),
            StatusCode::NOT_FOUND,
        ),
    };
    Ok(reply)
}
