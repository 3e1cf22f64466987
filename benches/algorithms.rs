use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sssp_suite::graph::generators::{grid_graph, random_graph};
use sssp_suite::Algorithm;

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");
    for &size in &[1_000usize, 10_000] {
        let graph = random_graph(size, size * 4, 100, Some(42)).expect("valid generated graph");
        for algorithm in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &graph, |b, graph| {
                b.iter(|| algorithm.run(black_box(graph), 1).expect("run succeeds"))
            });
        }
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_100x100");
    let graph = grid_graph(100, 100, 10, Some(7)).expect("valid generated graph");
    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter(|| algorithm.run(black_box(&graph), 1).expect("run succeeds"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
