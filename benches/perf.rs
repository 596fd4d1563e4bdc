use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use matchtrack::breakdown::{ViewMode, stat_breakdown};
use matchtrack::fixture_feed;
use matchtrack::model::MatchRecord;
use matchtrack::momentum::{MomentumWeights, momentum_series};
use matchtrack::taxonomy::Taxonomy;
use matchtrack::timeline::{build_timeline, rows_from_segments};

fn sample_match() -> MatchRecord {
    let mut rng = StdRng::seed_from_u64(26);
    fixture_feed::demo_match(&mut rng)
}

fn bench_stat_breakdown(c: &mut Criterion) {
    let record = sample_match();
    let taxonomy = Taxonomy::standard();
    c.bench_function("stat_breakdown", |b| {
        b.iter(|| {
            for segment in &record.segments {
                black_box(stat_breakdown(
                    black_box(&segment.events),
                    taxonomy,
                    ViewMode::Full,
                ));
            }
        })
    });
}

fn bench_momentum_series(c: &mut Criterion) {
    let record = sample_match();
    c.bench_function("momentum_series", |b| {
        b.iter(|| {
            black_box(momentum_series(
                black_box(&record.segments),
                MomentumWeights::default(),
            ))
        })
    });
}

fn bench_build_timeline(c: &mut Criterion) {
    let record = sample_match();
    let rows = rows_from_segments(&record.segments);
    c.bench_function("build_timeline", |b| {
        b.iter(|| black_box(build_timeline(black_box(&rows))))
    });
}

criterion_group!(
    benches,
    bench_stat_breakdown,
    bench_momentum_series,
    bench_build_timeline
);
criterion_main!(benches);
