use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dataset::SongTable;
use resolver::{resolve, resolve_labeled};
use std::path::PathBuf;
use std::time::Instant;

/// TuneRecs - Song Recommendation Dashboard Engine
#[derive(Parser)]
#[command(name = "tune-recs")]
#[command(about = "Look up precomputed song recommendations and artist charts", long_about = None)]
struct Cli {
    /// Path to the song dataset CSV
    #[arg(short, long, default_value = "data/spotify_recs_2023.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List distinct track names from the dataset
    Tracks {
        /// Case-insensitive substring filter
        #[arg(long)]
        filter: Option<String>,
    },

    /// Resolve recommendations for a selection of songs
    Recommend {
        /// Song to add to the selection (repeat the flag, order is preserved)
        #[arg(long = "song", required = true)]
        songs: Vec<String>,

        /// Print the raw stored segments instead of cleaned labels
        #[arg(long)]
        raw: bool,
    },

    /// Show the top artists by total stream count
    TopArtists {
        /// Number of artists to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Time repeated resolves over random selections
    Benchmark {
        /// Number of resolves to run
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Songs per random selection
        #[arg(long, default_value = "5")]
        selection_size: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the table once up front, every command reads from it
    println!("Loading song dataset from {}...", cli.data.display());
    let start = Instant::now();
    let table = SongTable::load_from_csv(&cli.data).context("Failed to load song dataset")?;
    println!(
        "{} Loaded {} songs in {:?}",
        "✓".green(),
        table.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Tracks { filter } => handle_tracks(&table, filter),
        Commands::Recommend { songs, raw } => handle_recommend(&table, songs, raw)?,
        Commands::TopArtists { limit } => handle_top_artists(&table, limit),
        Commands::Benchmark {
            requests,
            selection_size,
        } => handle_benchmark(&table, requests, selection_size)?,
    }

    Ok(())
}

/// Handle the 'tracks' command
fn handle_tracks(table: &SongTable, filter: Option<String>) {
    let mut names: Vec<&str> = table.distinct_track_names().into_iter().collect();
    names.sort();

    let filter_lower = filter.map(|f| f.to_lowercase());
    let mut shown = 0usize;
    for name in &names {
        if let Some(ref needle) = filter_lower {
            if !name.to_lowercase().contains(needle) {
                continue;
            }
        }
        println!("  {}", name);
        shown += 1;
    }

    println!(
        "{}",
        format!("{} of {} distinct tracks", shown, names.len()).bold().blue()
    );
}

/// Handle the 'recommend' command
fn handle_recommend(table: &SongTable, songs: Vec<String>, raw: bool) -> Result<()> {
    println!("{}", "You Might Also Like...".bold().blue());

    if raw {
        let segments = resolve(table, &songs)?;
        for segment in segments {
            println!("  {:?}", segment);
        }
    } else {
        let recommendations = resolve_labeled(table, &songs)?;
        for rec in recommendations {
            println!(
                "  {} {}",
                rec.label.trim(),
                format!("(via {})", rec.source_track).dimmed()
            );
        }
    }
    Ok(())
}

/// Handle the 'top-artists' command
fn handle_top_artists(table: &SongTable, limit: usize) {
    println!("{}", "Most Popular Artists by Streams".bold().blue());

    for (rank, (artist, streams)) in table.top_artists_by_streams(limit).iter().enumerate() {
        println!(
            "{}. {} - {} streams",
            (rank + 1).to_string().green(),
            artist,
            streams
        );
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(table: &SongTable, requests: usize, selection_size: usize) -> Result<()> {
    let mut names: Vec<String> = table
        .distinct_track_names()
        .into_iter()
        .map(String::from)
        .collect();
    names.sort();
    if names.is_empty() || requests == 0 {
        println!("Nothing to benchmark");
        return Ok(());
    }

    // Build random selections of existing tracks
    let selections: Vec<Vec<String>> = (0..requests)
        .map(|_| {
            (0..selection_size)
                .map(|_| {
                    let idx = rand::random::<u32>() as usize % names.len();
                    names[idx].clone()
                })
                .collect()
        })
        .collect();

    // Time each resolve
    let mut timings = Vec::with_capacity(requests);
    let mut resolved_total = 0usize;
    for selection in &selections {
        let start = Instant::now();
        let recommendations = resolve_labeled(table, selection)?;
        timings.push(start.elapsed());
        resolved_total += recommendations.len();
    }

    // Calculate and display statistics
    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Resolves: {} ({} recommendations total)", requests, resolved_total);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} resolves/second", throughput);

    Ok(())
}
