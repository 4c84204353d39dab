//! Server crate for the TuneRecs dashboard.
//!
//! This crate holds the orchestrator that runs one synchronous pass per
//! dashboard interaction, the per-session selection state, and the warp
//! routes that expose the dashboard over HTTP.

pub mod http;
pub mod orchestrator;
pub mod session;

pub use http::dashboard_filters;
pub use orchestrator::{
    ArtistStreams, DashboardOrchestrator, DashboardView, TOP_ARTISTS_LIMIT,
};
pub use session::SessionContext;
