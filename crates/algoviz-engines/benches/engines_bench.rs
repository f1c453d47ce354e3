//! Benchmarks for Algoviz Engines
//!
//! Measures log recording time for:
//! - Graph traversal at the node-count bounds
//! - Sorting at the largest array size
//! - Maze generation and search on a full-stage grid
//! - Traveling salesman at the city-count bounds

use algoviz_engines::{bfs, dfs, find_path, generate_maze, merge_sort, quick_sort, traveling_salesman};
use algoviz_structures::{random_array, Cities, Graph, MazeGrid, Stage};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark BFS and DFS across densities
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for &density in &[0.0, 50.0, 100.0] {
        let graph = Graph::generate(20, density, &mut rng);
        group.bench_with_input(BenchmarkId::new("bfs", density), &graph, |b, g| {
            b.iter(|| bfs(black_box(g)))
        });
        group.bench_with_input(BenchmarkId::new("dfs", density), &graph, |b, g| {
            b.iter(|| dfs(black_box(g)))
        });
    }
    group.finish();
}

/// Benchmark both sorts on the largest array
fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let bars = random_array(310, &mut rng);

    group.throughput(Throughput::Elements(bars.len() as u64));
    group.bench_function("quick_sort", |b| b.iter(|| quick_sort(black_box(bars.clone()))));
    group.bench_function("merge_sort", |b| b.iter(|| merge_sort(black_box(bars.clone()))));
    group.finish();
}

/// Benchmark maze generation and the search over the generated maze
fn bench_maze(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze");
    let (empty, _) = MazeGrid::fit_stage(1200.0, 700.0);

    group.bench_function("generate", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let mut grid = empty.clone();
            generate_maze(black_box(&mut grid), &mut rng)
        })
    });

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut carved = empty.clone();
    generate_maze(&mut carved, &mut rng);
    group.bench_function("find_path", |b| b.iter(|| find_path(black_box(&carved))));
    group.finish();
}

/// Benchmark the exhaustive tour search
fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("traveling_salesman");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for &count in &[3usize, 5, 8] {
        let cities = Cities::generate(count, Stage::default(), &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(count), &cities, |b, map| {
            b.iter(|| traveling_salesman(black_box(map.distances())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traversal, bench_sorting, bench_maze, bench_tsp);

criterion_main!(benches);
