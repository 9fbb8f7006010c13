//! Criterion benchmarks for graphwork.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use graphwork::format::{MatrixReader, MatrixWriter};
use graphwork::graph::{Graph, GraphBuilder};
use graphwork::structures::StructureDeriver;

/// Random weighted graph over `1..=order`, every vertex chained to the next
/// so the graph is connected, plus `extra_per_node` random edges each.
fn make_graph(order: usize, extra_per_node: usize, directed: bool) -> Graph {
    let mut rng = rand::thread_rng();
    let mut builder = GraphBuilder::new(order)
        .directed(directed)
        .edge_weighted(true)
        .all_nodes();

    for id in 1..order as u32 {
        builder = builder.edge(id, id + 1, rng.gen_range(1.0..10.0));
    }
    for id in 1..=order as u32 {
        for _ in 0..extra_per_node {
            let target = rng.gen_range(1..=order as u32);
            if target != id {
                builder = builder.edge(id, target, rng.gen_range(1.0..10.0));
            }
        }
    }

    builder.build().unwrap()
}

fn bench_insert_edge(c: &mut Criterion) {
    let mut graph = make_graph(500, 0, true);

    c.bench_function("insert_edge_500", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let src = rng.gen_range(1..=500u32);
            let tgt = rng.gen_range(1..=500u32);
            let _ = graph.insert_edge(src, tgt, 1.0);
        })
    });
}

fn bench_derive_structures(c: &mut Criterion) {
    let graph = make_graph(300, 3, false);

    c.bench_function("derive_structures_300", |b| {
        b.iter(|| {
            let _ = StructureDeriver::derive(&graph);
        })
    });
}

fn bench_breadth_first_search(c: &mut Criterion) {
    let graph = make_graph(500, 3, false);

    c.bench_function("bfs_500", |b| {
        b.iter(|| {
            let _ = graph.breadth_first_search(1).unwrap();
        })
    });
}

fn bench_depth_first_search(c: &mut Criterion) {
    let graph = make_graph(500, 3, false);

    c.bench_function("dfs_500", |b| {
        b.iter(|| {
            let _ = graph.depth_first_search(1).unwrap();
        })
    });
}

fn bench_prim(c: &mut Criterion) {
    let graph = make_graph(500, 5, false);

    c.bench_function("prim_500", |b| {
        b.iter(|| {
            let _ = graph.prim_mst();
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = make_graph(500, 5, true);

    c.bench_function("dijkstra_500", |b| {
        b.iter(|| {
            let _ = graph.dijkstra(0).unwrap();
        })
    });
}

fn bench_read_file_300(c: &mut Criterion) {
    let graph = make_graph(300, 3, true);
    let tmp = NamedTempFile::new().unwrap();
    MatrixWriter::write_to_file(&graph, tmp.path()).unwrap();
    let reader = MatrixReader::new();

    c.bench_function("read_matrix_file_300", |b| {
        b.iter(|| {
            let _ = reader.read_from_file(tmp.path()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_insert_edge,
    bench_derive_structures,
    bench_breadth_first_search,
    bench_depth_first_search,
    bench_prim,
    bench_dijkstra,
    bench_read_file_300,
);
criterion_main!(benches);
