//! Benchmarks for single-step stencil sweeps.
//!
//! Run with: `cargo bench --bench stencil_bench`
//! Parallel sweeps: `cargo bench --bench stencil_bench --features parallel`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fd_advection::schemes::StencilValues;
use fd_advection::{FiniteDifferenceScheme, StandardScheme, create_scheme};

fn sine_field(n: usize) -> Vec<f64> {
    (0..n)
        .map(|j| (2.0 * std::f64::consts::PI * j as f64 / n as f64).sin())
        .collect()
}

/// One periodic sweep into a preallocated buffer.
fn bench_step_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_into");

    for n in [1_000, 10_000, 100_000] {
        let u = sine_field(n);
        let mut out = vec![0.0; n];
        group.throughput(Throughput::Elements(n as u64));

        for scheme in StandardScheme::ALL {
            let cfl = scheme.recommended_cfl();
            group.bench_with_input(BenchmarkId::new(scheme.short_name(), n), &n, |b, _| {
                b.iter(|| scheme.step_into(black_box(&u), black_box(cfl), &mut out));
            });
        }
    }

    group.finish();
}

/// Enum dispatch against a boxed trait object.
fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let n = 10_000;
    let u = sine_field(n);
    let mut out = vec![0.0; n];

    let scheme = StandardScheme::SecondOrderUpwind;
    let boxed = create_scheme(scheme);

    group.bench_function("enum", |b| {
        b.iter(|| scheme.step_into(black_box(&u), 0.4, &mut out));
    });
    group.bench_function("boxed", |b| {
        b.iter(|| boxed.step_into(black_box(&u), 0.4, &mut out));
    });

    group.finish();
}

/// Point update on an already gathered stencil.
fn bench_point_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_update");
    let u = sine_field(64);
    let s = StencilValues::gather(&u, 10);

    for scheme in StandardScheme::ALL {
        group.bench_function(scheme.short_name(), |b| {
            b.iter(|| scheme.update(black_box(&s), black_box(0.4)));
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_step_into_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_into_parallel");

    for n in [10_000, 100_000, 1_000_000] {
        let u = sine_field(n);
        let mut out = vec![0.0; n];
        group.throughput(Throughput::Elements(n as u64));

        let scheme = StandardScheme::FirstOrderUpwind;
        group.bench_with_input(BenchmarkId::new("serial", n), &n, |b, _| {
            b.iter(|| scheme.step_into(black_box(&u), 0.8, &mut out));
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &n, |b, _| {
            b.iter(|| scheme.step_into_parallel(black_box(&u), 0.8, &mut out));
        });
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
criterion_group!(benches, bench_step_into, bench_dispatch, bench_point_update);

#[cfg(feature = "parallel")]
criterion_group!(
    benches,
    bench_step_into,
    bench_dispatch,
    bench_point_update,
    bench_step_into_parallel
);

criterion_main!(benches);
