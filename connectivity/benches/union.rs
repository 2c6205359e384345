use connectivity::{Algorithm, DynamicConnectivity, Sequence};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pairs(n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    for &n in &[256usize, 2048] {
        let input = pairs(n, n);
        for alg in Algorithm::all() {
            group.bench_with_input(BenchmarkId::new(alg.name(), n), &input, |b, input| {
                b.iter(|| {
                    let mut seq = Sequence::new(*alg, n);
                    for &(p, q) in input {
                        seq.merge(p, q);
                    }
                    black_box(seq.component_count())
                })
            });
        }
    }
    group.finish();
}

fn bench_connected(c: &mut Criterion) {
    let n = 2048;
    let input = pairs(n, n / 2);
    let queries = pairs(n, 1024);
    let mut group = c.benchmark_group("connected");
    for alg in Algorithm::all() {
        let seq = input
            .iter()
            .fold(Sequence::new(*alg, n), |seq, &(p, q)| seq.union(p, q));
        group.bench_function(alg.name(), |b| {
            b.iter(|| {
                queries
                    .iter()
                    .filter(|&&(p, q)| seq.connected(black_box(p), black_box(q)))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_union, bench_connected);
criterion_main!(benches);
