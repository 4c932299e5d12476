use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use growth_tracker_rust::{generate, lookup_profile, GrowthRng, GrowthTracker, TimeRange, TrackerConfig};

fn bench_generate(c: &mut Criterion) {
    let profile = lookup_profile("tomato");
    let mut group = c.benchmark_group("generate");

    for range in TimeRange::ALL_RANGES {
        group.bench_with_input(BenchmarkId::from_parameter(range), &range, |b, &range| {
            let mut rng = GrowthRng::from_seed_u64(42);
            b.iter(|| generate(black_box(profile), black_box(range), &mut rng))
        });
    }

    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let mut tracker = GrowthTracker::new(TrackerConfig::seeded(42));
    c.bench_function("report_three_months", |b| {
        b.iter(|| tracker.report(black_box("pepper"), TimeRange::ThreeMonths))
    });
}

criterion_group!(benches, bench_generate, bench_full_report);
criterion_main!(benches);
