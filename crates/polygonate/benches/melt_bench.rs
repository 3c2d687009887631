//! Criterion benchmarks for the melt engine.
//! Focus sizes: n in {10, 30, 100} points per cloud, one run per policy.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygonate::prelude::*;

fn cloud(n: usize) -> Vec<Vec2<f64>> {
    draw_points_uniform(
        ScatterCfg {
            count: n,
            extent: 1.0,
        },
        ReplayToken {
            seed: 43,
            index: n as u64,
        },
    )
}

fn bench_polygonate(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygonate");
    let policies = [
        ("shortest", WallPolicy::Shortest),
        ("longest", WallPolicy::Longest),
        ("sharpest", WallPolicy::Sharpest),
    ];
    for &n in &[10usize, 30, 100] {
        for (name, policy) in policies {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, &n| {
                b.iter_batched(
                    || cloud(n),
                    |pts| {
                        let _shapes = polygonate(&pts, policy).unwrap();
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("removable_walls");
    for &n in &[10usize, 30, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n),
                |pts| {
                    let _cands = removable_walls(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygonate, bench_detect);
criterion_main!(benches);
