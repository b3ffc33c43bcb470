//! Benchmarks for estimate derivation and session edits.
//!
//! Run with: `cargo bench --package pacsize-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pacsize_bench::synthetic_rows;
use pacsize_lib::{EstimatorState, RowField, Session, Window, derive};
use std::hint::black_box;

fn derive_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for count in [3usize, 100, 10_000] {
        let rows = synthetic_rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| derive(black_box(rows), black_box(Window::Years5)));
        });
    }

    group.finish();
}

fn session_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for count in [3usize, 1_000] {
        let state = EstimatorState::new(synthetic_rows(count), Window::Year1);
        let mut session = match Session::new(state) {
            Ok(session) => session,
            Err(e) => panic!("synthetic rows should be valid: {e}"),
        };

        group.bench_function(BenchmarkId::new("update_field", count), |b| {
            let mut toggle = false;
            b.iter(|| {
                toggle = !toggle;
                let value = if toggle { "2" } else { "3" };
                black_box(session.update_field(0, RowField::Devices, value))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, derive_benchmark, session_benchmark);
criterion_main!(benches);
