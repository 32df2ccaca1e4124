use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lda_gibbs::{sample_index_in_place, sample_index_with_rng, Corpus, Document, SamplingParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_sample_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_index");
    let sizes = [5, 50, 500];

    for &size in &sizes {
        let weights: Vec<f64> = (0..size).map(|i| 1.0 + i as f64).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        group.bench_function(format!("weights_{}", size), |b| {
            b.iter(|| {
                black_box(sample_index_with_rng(black_box(&weights), &mut rng).ok());
            })
        });
        let mut buf = weights.clone();
        group.bench_function(format!("in_place_{}", size), |b| {
            b.iter(|| {
                buf.copy_from_slice(&weights);
                black_box(sample_index_in_place(black_box(&mut buf), &mut rng).ok());
            })
        });
    }
    group.finish();
}

fn synthetic_corpus(n_docs: usize, doc_len: usize, vocab: usize, k: usize) -> Corpus {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let params = SamplingParams::with_topics(k).expect("valid params");
    let docs = (0..n_docs)
        .map(|d| {
            let words = (0..doc_len)
                .map(|i| format!("w{}", (d * 31 + i * 7) % vocab))
                .collect();
            Document::new_with_rng(format!("d{d}"), words, k, &mut rng).expect("valid doc")
        })
        .collect();
    Corpus::new(docs, params).expect("valid corpus")
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let topic_counts = [5, 20];

    for &k in &topic_counts {
        let mut corpus = synthetic_corpus(100, 200, 1_000, k);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        group.bench_function(format!("docs100_len200_k{}", k), |b| {
            b.iter(|| {
                corpus.resample_with_rng(&mut rng).expect("sweep");
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample_index, bench_sweep);
criterion_main!(benches);
