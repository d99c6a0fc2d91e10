//! Benchmarks for graph traversal, topological sorting and cycle detection.
//!
//! Inputs:
//! - Long chains (worst case for path depth)
//! - Layered DAGs (wide, many cross edges)
//! - A layered DAG closed into a cycle by one back edge
//! - Edge-list parsing of a layered DAG

extern crate adtgraph;

use adtgraph::{
    graph::{algorithms, parse_edge_list},
    Graph,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Chain 0 -> 1 -> ... -> n-1.
fn chain(n: usize) -> Graph {
    Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap()
}

/// `layers` layers of `width` vertices, each vertex linked to every vertex of the next layer.
fn layered(layers: usize, width: usize) -> Graph {
    let edges = (0..layers - 1).flat_map(move |layer| {
        (0..width).flat_map(move |from| {
            (0..width).map(move |to| (layer * width + from, (layer + 1) * width + to))
        })
    });
    Graph::from_edges(layers * width, edges).unwrap()
}

fn bench_dfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("dfs");
    for n in [1_000, 100_000] {
        let graph = chain(n);
        group.bench_with_input(BenchmarkId::new("chain", n), &graph, |b, graph| {
            b.iter(|| black_box(graph.dfs()));
        });
    }

    let graph = layered(50, 20);
    group.bench_function("layered_50x20", |b| {
        b.iter(|| black_box(graph.dfs()));
    });
    group.finish();
}

fn bench_topo_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topo_sort");
    let chain = chain(100_000);
    group.bench_function("chain_100000", |b| {
        b.iter(|| black_box(chain.topo_sort().unwrap()));
    });

    let graph = layered(50, 20);
    group.bench_function("layered_50x20", |b| {
        b.iter(|| black_box(graph.topo_sort().unwrap()));
    });
    group.finish();
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");

    let acyclic = layered(20, 10);
    let mut cyclic = acyclic.clone();
    cyclic.add_edge(acyclic.vertex_count() - 1, 0).unwrap();

    for (name, graph) in [("acyclic", &acyclic), ("cyclic", &cyclic)] {
        group.bench_with_input(BenchmarkId::new("dfs", name), graph, |b, graph| {
            b.iter(|| black_box(algorithms::is_cyclic(graph).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("bfs", name), graph, |b, graph| {
            b.iter(|| black_box(algorithms::is_cyclic_bfs(graph).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("kahn", name), graph, |b, graph| {
            b.iter(|| black_box(algorithms::is_cyclic_kahn(graph).unwrap()));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = layered(50, 20).to_string();

    c.bench_function("parse_edge_list_layered_50x20", |b| {
        b.iter(|| black_box(parse_edge_list(black_box(&text)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_dfs,
    bench_topo_sort,
    bench_cycle_detection,
    bench_parse
);
criterion_main!(benches);
