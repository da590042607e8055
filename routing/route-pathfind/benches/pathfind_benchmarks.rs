//! Benchmarks for grid construction and A* search.
//!
//! Run with: cargo bench -p route-pathfind
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p route-pathfind -- --save-baseline main
//! 2. After changes: cargo bench -p route-pathfind -- --baseline main

#![allow(missing_docs, clippy::unwrap_used, clippy::cast_precision_loss)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nav_spatial::{Aabb, GridConfig, NavGrid, Point3};
use route_pathfind::{Pathfinder, find_path};
use route_types::PathfinderConfig;

// =============================================================================
// Scene Generation
// =============================================================================

/// Parallel walls across the default cube, each with an opening at
/// alternating ends so the search has to weave through them.
fn slalom_walls(count: usize) -> Vec<Aabb> {
    (0..count)
        .map(|i| {
            let x = 4.0 + 3.0 * i as f64;
            let (y_min, y_max) = if i % 2 == 0 { (0.0, 34.0) } else { (6.0, 40.0) };
            Aabb::new(Point3::new(x, y_min, 0.0), Point3::new(x + 0.5, y_max, 40.0))
        })
        .collect()
}

/// A scattered field of small crates.
fn crate_field(count: usize) -> Vec<Aabb> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let x = (t * 7.3) % 38.0;
            let y = (t * 3.1) % 38.0;
            let z = (t * 5.7) % 38.0;
            Aabb::new(Point3::new(x, y, z), Point3::new(x + 1.0, y + 1.0, z + 1.0))
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_grid_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("GridBuild");
    let config = GridConfig::default();

    for count in [10, 100, 1000] {
        let obstacles = crate_field(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("crates", count), &obstacles, |b, obstacles| {
            b.iter(|| NavGrid::build(black_box(&config), black_box(obstacles)).unwrap());
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.sample_size(20);

    let open = Pathfinder::new(PathfinderConfig::default(), &[] as &[Aabb]).unwrap();
    group.bench_function("open_diagonal", |b| {
        b.iter(|| {
            open.find_path(
                black_box(Point3::new(0.1, 0.1, 0.1)),
                black_box(Point3::new(39.9, 39.9, 39.9)),
            )
            .unwrap()
        });
    });

    let slalom = Pathfinder::new(PathfinderConfig::default(), &slalom_walls(10)).unwrap();
    group.bench_function("slalom_10_walls", |b| {
        b.iter(|| {
            slalom
                .find_path(
                    black_box(Point3::new(1.0, 20.0, 20.0)),
                    black_box(Point3::new(39.0, 20.0, 20.0)),
                )
                .unwrap()
        });
    });

    let field = Pathfinder::new(PathfinderConfig::default(), &crate_field(500)).unwrap();
    group.bench_function("crate_field_500", |b| {
        b.iter(|| {
            field
                .find_path(
                    black_box(Point3::new(0.2, 39.8, 0.2)),
                    black_box(Point3::new(39.8, 0.2, 39.8)),
                )
                .unwrap()
        });
    });

    group.finish();
}

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("OneShot");
    group.sample_size(10);

    let config = PathfinderConfig::default();
    let walls = slalom_walls(4);
    group.bench_function("build_and_search", |b| {
        b.iter(|| {
            find_path(
                black_box(Point3::new(1.0, 20.0, 20.0)),
                black_box(Point3::new(20.0, 20.0, 20.0)),
                black_box(&walls),
                &config,
            )
            .unwrap()
        });
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_grid_build, bench_search, bench_one_shot);
criterion_main!(benches);
