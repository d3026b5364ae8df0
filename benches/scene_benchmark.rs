/*
 * Descaling Animation Benchmark
 *
 * Measures scene construction with the two bond scans (pairwise and
 * grid-bucketed) at increasing particle densities, and the cost of one
 * animation tick.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use descaling::{Animation, AnimationParams, Scene};

// Benchmark scene construction for both bond scans
fn bench_scene_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_build");

    for grid_points in [30, 60, 120].iter() {
        for enable_spatial_grid in [false, true] {
            let params = AnimationParams {
                grid_points: *grid_points,
                enable_spatial_grid,
                ..AnimationParams::default()
            };
            let id = if enable_spatial_grid { "grid" } else { "pairwise" };

            group.bench_with_input(BenchmarkId::new(id, grid_points), &params, |b, params| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(1);
                    black_box(Scene::build(params, &mut rng));
                });
            });
        }
    }

    group.finish();
}

// Benchmark a single animation tick
fn bench_tick(c: &mut Criterion) {
    let params = AnimationParams {
        seed: Some(1),
        ..AnimationParams::default()
    };
    let mut animation = Animation::new(params);

    c.bench_function("tick", |b| {
        b.iter(|| black_box(animation.tick()));
    });
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_scene_build, bench_tick
}

criterion_main!(benches);
