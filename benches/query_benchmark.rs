use chrono::NaiveDate;
use climate_query::models::Measurement;
use climate_query::queries::{aggregate_temperatures, most_active_station, precipitation_since};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Create test data for benchmarking
fn create_test_measurements(station_count: usize, days: usize) -> Vec<Measurement> {
    let base_date = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
    let mut measurements = Vec::with_capacity(station_count * days);

    for station in 1..=station_count {
        for day in 0..days {
            let date = base_date + chrono::Duration::days(day as i64);
            let tobs = 70.0 + (day as f64 * 0.05) + (station as f64 * 0.5);
            let prcp = if day % 7 == 0 {
                None
            } else {
                Some((day % 10) as f64 * 0.02)
            };

            measurements.push(Measurement::new(
                &format!("USC{:08}", station),
                date,
                prcp,
                tobs,
            ));
        }
    }

    measurements
}

fn benchmark_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_temperatures");

    for station_count in [10, 50, 100] {
        let measurements = create_test_measurements(station_count, 365);
        let start = NaiveDate::from_ymd_opt(2016, 4, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2016, 10, 1).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &measurements,
            |b, measurements| {
                b.iter(|| {
                    aggregate_temperatures(
                        black_box(measurements),
                        black_box(start),
                        black_box(Some(end)),
                        None,
                    )
                })
            },
        );
    }

    group.finish();
}

fn benchmark_most_active_station(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_active_station");

    for station_count in [10, 50, 100] {
        let measurements = create_test_measurements(station_count, 365);
        let after = NaiveDate::from_ymd_opt(2016, 4, 1).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(station_count),
            &measurements,
            |b, measurements| {
                b.iter(|| most_active_station(black_box(measurements), black_box(after)))
            },
        );
    }

    group.finish();
}

fn benchmark_precipitation_projection(c: &mut Criterion) {
    let measurements = create_test_measurements(50, 365);
    let after = NaiveDate::from_ymd_opt(2016, 4, 1).unwrap();

    c.bench_function("precipitation_since", |b| {
        b.iter(|| precipitation_since(black_box(&measurements), black_box(after)))
    });
}

criterion_group!(
    benches,
    benchmark_aggregate,
    benchmark_most_active_station,
    benchmark_precipitation_projection
);
criterion_main!(benches);
