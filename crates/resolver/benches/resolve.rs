//! Benchmarks for recommendation resolution and chart aggregation
//!
//! Run with: cargo bench --package resolver
//!
//! Uses a synthetic table so the benchmark doesn't depend on the dataset file.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dataset::{SongRecord, SongTable};
use resolver::{resolve, resolve_labeled};

fn build_synthetic_table(rows: usize) -> SongTable {
    let mut table = SongTable::new();
    for i in 0..rows {
        table.insert_row(SongRecord {
            track_name: format!("Track {i}"),
            artists: format!("Artist {}", i % 50),
            streams: (i as u64 + 1) * 1_000_000,
            recommendations: vec![
                format!("['Track {}'", (i + 1) % rows),
                format!(" 'Track {}'", (i + 2) % rows),
                format!(" 'Track {}']", (i + 3) % rows),
            ],
        });
    }
    table
}

fn bench_resolve(c: &mut Criterion) {
    let table = build_synthetic_table(1000);
    let selected: Vec<String> = (0..10).map(|i| format!("Track {}", i * 97)).collect();

    c.bench_function("resolve_10_tracks", |b| {
        b.iter(|| {
            let recs = resolve(black_box(&table), black_box(&selected));
            black_box(recs)
        })
    });
}

fn bench_resolve_labeled(c: &mut Criterion) {
    let table = build_synthetic_table(1000);
    let selected: Vec<String> = (0..10).map(|i| format!("Track {}", i * 97)).collect();

    c.bench_function("resolve_labeled_10_tracks", |b| {
        b.iter(|| {
            let recs = resolve_labeled(black_box(&table), black_box(&selected));
            black_box(recs)
        })
    });
}

fn bench_top_artists(c: &mut Criterion) {
    let table = build_synthetic_table(1000);

    c.bench_function("top_artists_by_streams", |b| {
        b.iter(|| {
            let top = table.top_artists_by_streams(black_box(10));
            black_box(top)
        })
    });
}

criterion_group!(benches, bench_resolve, bench_resolve_labeled, bench_top_artists);
criterion_main!(benches);
