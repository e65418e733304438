use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listing_booking_engine::{validate_checkout, AvailabilityIndex};
use rand::{rngs::StdRng, Rng, SeedableRng};

// Builds an index with roughly `density` of the days in 2024-2026 booked
fn random_index(density: f64, rng: &mut StdRng) -> AvailabilityIndex {
    let mut index = AvailabilityIndex::new();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();

    for day in start.iter_days().take_while(|d| *d <= end) {
        if rng.gen_bool(density) {
            index.mark_booked(day);
        }
    }
    index
}

pub fn validation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_validation");

    // Worst case for the walk: an empty index forces a full scan of the range
    for range_days in [7i64, 30, 180, 365].iter() {
        group.bench_with_input(
            BenchmarkId::new("empty_index_walk", range_days),
            range_days,
            |b, &range_days| {
                let index = AvailabilityIndex::new();
                let check_in = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
                let check_out = check_in + chrono::Duration::days(range_days);

                b.iter(|| {
                    let result =
                        validate_checkout(black_box(&index), check_in, black_box(check_out));
                    black_box(result)
                });
            },
        );
    }

    // Dense indexes short-circuit early on the first conflict
    for density in [0.05, 0.25, 0.75].iter() {
        group.bench_with_input(
            BenchmarkId::new("random_index_30_days", format!("{density}")),
            density,
            |b, &density| {
                let mut rng = StdRng::seed_from_u64(42);
                let index = random_index(density, &mut rng);
                let check_in = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
                let check_out = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

                b.iter(|| {
                    let result =
                        validate_checkout(black_box(&index), check_in, black_box(check_out));
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, validation_benchmark);
criterion_main!(benches);
