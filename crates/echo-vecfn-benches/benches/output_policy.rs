// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use echo_vecfn::{dir, dir_into, norm, norm_into, sub, sub_into, vec};
use echo_vecfn_benches::points;
use std::hint::black_box;

fn bench_difference(c: &mut Criterion) {
    let mut group = c.benchmark_group("difference");
    for &dim in &[2usize, 3, 16, 256] {
        let pts = points(2, dim);
        let (a, b) = (&pts[0], &pts[1]);
        group.throughput(Throughput::Elements(dim as u64));

        // Mutate-left: the copy is setup, only the subtraction is timed.
        group.bench_with_input(BenchmarkId::new("sub", dim), &dim, |bench, _| {
            bench.iter_batched_ref(
                || b.clone(),
                |left| {
                    sub(left, a);
                },
                BatchSize::SmallInput,
            );
        });

        // Write-into with a reused, pre-sized target: no allocation per iteration.
        let mut target = vec![0.0; dim];
        group.bench_with_input(BenchmarkId::new("sub_into", dim), &dim, |bench, _| {
            bench.iter(|| {
                sub_into(black_box(b), black_box(a), &mut target);
            });
        });

        // Allocating: fresh Vec every call.
        group.bench_with_input(BenchmarkId::new("vec", dim), &dim, |bench, _| {
            bench.iter(|| black_box(vec(black_box(a), black_box(b))));
        });
    }
    group.finish();
}

fn bench_direction(c: &mut Criterion) {
    let mut group = c.benchmark_group("direction");
    for &dim in &[3usize, 64] {
        let pts = points(2, dim);
        let (a, b) = (&pts[0], &pts[1]);
        group.throughput(Throughput::Elements(dim as u64));

        group.bench_with_input(BenchmarkId::new("norm", dim), &dim, |bench, _| {
            bench.iter_batched_ref(
                || b.clone(),
                |v| {
                    norm(v);
                },
                BatchSize::SmallInput,
            );
        });

        let mut unit = vec![0.0; dim];
        group.bench_with_input(BenchmarkId::new("norm_into", dim), &dim, |bench, _| {
            bench.iter(|| {
                norm_into(black_box(b), &mut unit);
            });
        });

        let mut target = Vec::with_capacity(dim);
        group.bench_with_input(BenchmarkId::new("dir_into", dim), &dim, |bench, _| {
            bench.iter(|| {
                dir_into(black_box(a), black_box(b), &mut target);
            });
        });

        group.bench_with_input(BenchmarkId::new("dir", dim), &dim, |bench, _| {
            bench.iter(|| black_box(dir(black_box(a), black_box(b))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_difference, bench_direction);
criterion_main!(benches);
