use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spantree::{Graph, SquareMatrix};

/// Random complete graph with weights in (0, 100), seeded for stable runs.
fn random_complete_graph(dim: usize, seed: u64) -> Graph<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut adj = SquareMatrix::zeros(dim);
    for i in 0..dim {
        for j in (i + 1)..dim {
            let w: f64 = rng.gen_range(0.1..100.0);
            adj.set(i, j, w);
            adj.set(j, i, w);
        }
    }
    Graph::new(adj).expect("generated matrix is valid")
}

fn bench_construct_mst(c: &mut Criterion) {
    for &dim in &[16usize, 64, 128, 256] {
        let graph = random_complete_graph(dim, 42);
        c.bench_function(&format!("construct_mst_complete_{dim}"), |b| {
            b.iter(|| black_box(graph.construct_mst().unwrap()));
        });
    }
}

fn bench_validation(c: &mut Criterion) {
    let graph = random_complete_graph(128, 7);
    let adjacency = graph.adjacency().clone();
    c.bench_function("graph_new_validate_128", |b| {
        b.iter(|| black_box(Graph::new(adjacency.clone()).unwrap()));
    });
}

criterion_group!(benches, bench_construct_mst, bench_validation);
criterion_main!(benches);
