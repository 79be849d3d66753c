//! Benchmark for BFS/DFS over both graph representations.
//!
//! Measures:
//! - Edge-text parsing for a dense 26-vertex graph
//! - Graph building (list vs matrix)
//! - BFS and DFS on each representation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphwalk_core::graph::{bfs, build_graph, dfs, parse_edges, Label, Representation};

/// Ring over all 26 labels plus every third chord.
fn dense_edge_text() -> String {
    let mut text = String::new();
    for i in 0..26 {
        let a = Label::from_index(i).map(|l| l.to_string()).unwrap_or_default();
        let next = Label::from_index((i + 1) % 26)
            .map(|l| l.to_string())
            .unwrap_or_default();
        let chord = Label::from_index((i * 3 + 7) % 26)
            .map(|l| l.to_string())
            .unwrap_or_default();
        text.push_str(&format!("{a} {next}\n{a} {chord}\n"));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = dense_edge_text();
    c.bench_function("parse_edges_26", |b| {
        b.iter(|| black_box(parse_edges(black_box(&text))));
    });
}

fn bench_build(c: &mut Criterion) {
    let edges = parse_edges(&dense_edge_text()).edges;
    let mut group = c.benchmark_group("build_graph");
    for representation in [Representation::List, Representation::Matrix] {
        group.bench_with_input(
            BenchmarkId::from_parameter(representation),
            &representation,
            |b, &representation| {
                b.iter(|| black_box(build_graph(26, representation, &edges)));
            },
        );
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let edges = parse_edges(&dense_edge_text()).edges;
    let mut group = c.benchmark_group("traversal");
    for representation in [Representation::List, Representation::Matrix] {
        let Ok(graph) = build_graph(26, representation, &edges) else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::new("bfs", representation),
            &graph,
            |b, graph| b.iter(|| black_box(bfs(graph, "A"))),
        );
        group.bench_with_input(
            BenchmarkId::new("dfs", representation),
            &graph,
            |b, graph| b.iter(|| black_box(dfs(graph, "A"))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_build, bench_traversal);
criterion_main!(benches);
