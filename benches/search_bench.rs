use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gridreach::services::algorithm::AdjacencyMap;
use gridreach::services::{search, Algorithm, GridGenerator};

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [32usize, 128, 256] {
        let mut generator = GridGenerator::new(size, size, 0.3, Some(42)).expect("generator");
        let mut grid = generator.generate().expect("grid");
        let start = generator.random_start(&mut grid).expect("start");

        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &grid, |b, grid| {
                b.iter(|| search(black_box(grid), start, algorithm).expect("search"))
            });
        }

        group.bench_with_input(BenchmarkId::new("adjacency_build", size), &grid, |b, grid| {
            b.iter(|| AdjacencyMap::build(black_box(grid)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
