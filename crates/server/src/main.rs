//! Dashboard web server for TuneRecs.
//!
//! Loads the song dataset once, then serves the single-page dashboard and its
//! JSON API until the process is stopped.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use dataset::SongTable;
use server::{dashboard_filters, DashboardOrchestrator};

/// TuneRecs dashboard server
#[derive(Parser)]
#[command(name = "tune-recs-server")]
#[command(about = "Serve the song recommendation dashboard", long_about = None)]
struct Args {
    /// Path to the song dataset CSV
    #[arg(long, default_value = "data/spotify_recs_2023.csv")]
    data: PathBuf,

    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,server=debug")),
        )
        .init();

    let args = Args::parse();

    info!("Starting TuneRecs dashboard server");
    let table = Arc::new(
        SongTable::load_from_csv(&args.data).context("Failed to load song dataset")?,
    );

    let orchestrator = Arc::new(DashboardOrchestrator::new(table));
    let routes = dashboard_filters(orchestrator);

    info!("Dashboard listening on http://{}", args.addr);
    warp::serve(routes).run(args.addr).await;

    Ok(())
}
