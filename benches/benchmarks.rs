use bearthday::carousel::{decrement, increment};
use bearthday::matcher::nearest_date;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Every date of 2020 plus the first weeks of 2021, newest first: the
/// worst-case feed size of a photo every day of a leap year.
fn full_feed() -> Vec<String> {
    let month_days = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut dates = Vec::new();
    for (month, days) in month_days.iter().enumerate() {
        for day in 1..=*days {
            dates.push(format!("2020-{:02}-{:02}", month + 1, day));
        }
    }
    for day in 1..=19 {
        dates.push(format!("2021-01-{:02}", day));
    }
    dates.reverse();
    dates
}

/// Benchmark the matcher scan at its best and worst
fn bench_nearest_date(c: &mut Criterion) {
    let feed = full_feed();
    let mut group = c.benchmark_group("nearest_date");

    // Exact hit near the top of the feed
    group.bench_with_input(
        BenchmarkId::new("exact_recent", feed.len()),
        &feed,
        |b, feed| {
            b.iter(|| black_box(nearest_date(black_box("1960-01-10"), feed).unwrap()));
        },
    );

    // Exact hit near the bottom, scanning almost the whole feed
    group.bench_with_input(
        BenchmarkId::new("exact_deep", feed.len()),
        &feed,
        |b, feed| {
            b.iter(|| black_box(nearest_date(black_box("1960-01-21"), feed).unwrap()));
        },
    );

    group.finish();
}

/// Benchmark cyclic index arithmetic
fn bench_cyclic_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclic_index");

    group.bench_function("increment_wrap", |b| {
        b.iter(|| {
            let mut index = 0;
            for _ in 0..100 {
                index = increment(black_box(index), black_box(7)).unwrap();
            }
            black_box(index)
        });
    });

    group.bench_function("decrement_wrap", |b| {
        b.iter(|| {
            let mut index = 0;
            for _ in 0..100 {
                index = decrement(black_box(index), black_box(7)).unwrap();
            }
            black_box(index)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_nearest_date, bench_cyclic_index);
criterion_main!(benches);
