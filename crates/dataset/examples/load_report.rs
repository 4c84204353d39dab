use dataset::SongTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_path = Path::new("data/spotify_recs_2023.csv");

    println!("Loading top-songs dataset...\n");

    let start = Instant::now();
    let table = SongTable::load_from_csv(data_path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Songs: {}", table.len());
    println!("Distinct track names: {}", table.distinct_track_names().len());

    println!("\nTop artists by streams:");
    for (artist, streams) in table.top_artists_by_streams(10) {
        println!("  {} - {}", artist, streams);
    }
}
