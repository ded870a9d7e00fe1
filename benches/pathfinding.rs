//! Navigation Benchmarks
//!
//! - Raster graph construction
//! - Nearest-node lookup (linear scan vs grid buckets)
//! - A* search across a furnished floor plan
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use image::{Rgb, RgbImage};

use marga_nav::core::MapPoint;
use marga_nav::pathfinding::AStarPlanner;
use marga_nav::query::{GridBucketLocator, LinearScanLocator, NodeLocator};
use marga_nav::raster::{RasterConfig, RasterGraphBuilder};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Square floor plan with rows of shelving leaving aisles between them
fn create_floor_plan(size: u32) -> RgbImage {
    let mut image = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    let mut x = 40;
    while x + 20 < size {
        // Alternate the aisle gap between top and bottom
        let (gap_start, gap_end) = if (x / 60) % 2 == 0 {
            (0, 60)
        } else {
            (size - 60, size)
        };
        for y in 0..size {
            if y < gap_start || y >= gap_end {
                for dx in 0..20 {
                    image.put_pixel(x + dx, y, Rgb([30, 30, 30]));
                }
            }
        }
        x += 60;
    }
    image
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_raster_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_build");
    for size in [300u32, 600, 1200] {
        let image = create_floor_plan(size);
        let builder = RasterGraphBuilder::new(RasterConfig::with_grid_step(5)).unwrap();
        group.throughput(Throughput::Elements((size as u64 / 5).pow(2)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &image, |b, image| {
            b.iter(|| builder.build(black_box(image)))
        });
    }
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let image = create_floor_plan(1200);
    let graph = RasterGraphBuilder::new(RasterConfig::with_grid_step(5))
        .unwrap()
        .build(&image);
    let point = MapPoint::new(611.3, 587.9);

    let mut group = c.benchmark_group("locate");
    let linear = LinearScanLocator::new(&graph);
    group.bench_function("linear_scan", |b| {
        b.iter(|| linear.locate(black_box(point), 50.0))
    });
    let bucketed = GridBucketLocator::with_auto_cell_size(&graph);
    group.bench_function("grid_buckets", |b| {
        b.iter(|| bucketed.locate(black_box(point), 50.0))
    });
    group.finish();
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");
    for size in [300u32, 600, 1200] {
        let image = create_floor_plan(size);
        let graph = RasterGraphBuilder::new(RasterConfig::with_grid_step(5))
            .unwrap()
            .build(&image);
        let locator = LinearScanLocator::new(&graph);
        let start = locator
            .locate_id(MapPoint::new(5.0, 5.0), 50.0)
            .unwrap()
            .clone();
        let goal = locator
            .locate_id(MapPoint::new(size as f32 - 5.0, size as f32 - 5.0), 50.0)
            .unwrap()
            .clone();
        let planner = AStarPlanner::with_defaults(&graph);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| planner.find_path(black_box(start.as_str()), black_box(goal.as_str())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raster_build, bench_locate, bench_astar);
criterion_main!(benches);
