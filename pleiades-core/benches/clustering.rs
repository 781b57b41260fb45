//! Clustering benchmark over synthetic MSets
//!
//! Measures end-to-end clustering latency (TF-IDF projection included) for
//! K-Means and Round-Robin at a result-page-sized document count.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;

use pleiades_core::{Clusterer, Document, KMeans, MSet, RoundRobin};

fn synthetic_mset(docs: usize, vocab: usize, terms_per_doc: usize, seed: u64) -> MSet {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..docs as u32)
        .map(|docid| {
            let mut doc = Document::new(docid);
            for _ in 0..terms_per_doc {
                let term = rng.random_range(0..vocab);
                doc.add_term(format!("term{term}"), rng.random_range(1..5));
            }
            doc
        })
        .collect()
}

fn bench_clustering(c: &mut Criterion) {
    let mset = synthetic_mset(200, 500, 30, 42);

    c.bench_function("kmeans_k8_200docs", |b| {
        let clusterer = KMeans::new(8).with_max_iters(20);
        b.iter(|| clusterer.cluster(black_box(&mset)).unwrap())
    });

    c.bench_function("round_robin_k8_200docs", |b| {
        let clusterer = RoundRobin::new(8);
        b.iter(|| clusterer.cluster(black_box(&mset)).unwrap())
    });
}

criterion_group!(benches, bench_clustering);
criterion_main!(benches);
