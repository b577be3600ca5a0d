use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bounded_run::strategies::{BruteForce, PrefixTreeSolver, ShrinkMemo};
use bounded_run::{Diagnostics, RunStrategy};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-200..800)).collect()
}

fn bench_prefix_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_tree");
    for &len in &[1_000usize, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(444);
        let items = random_items(&mut rng, len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            b.iter(|| {
                let best = PrefixTreeSolver.solve(black_box(items), 5000, &Diagnostics::silent());
                black_box(best);
            })
        });
    }
    group.finish();
}

fn bench_against_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies_small");
    let mut rng = StdRng::seed_from_u64(7);
    let items = random_items(&mut rng, 400);

    group.bench_function("prefix_tree", |b| {
        b.iter(|| black_box(PrefixTreeSolver.solve(black_box(&items), 5000, &Diagnostics::silent())))
    });
    group.bench_function("brute_force", |b| {
        b.iter(|| black_box(BruteForce.solve(black_box(&items), 5000, &Diagnostics::silent())))
    });
    group.bench_function("shrink_memo", |b| {
        b.iter(|| black_box(ShrinkMemo.solve(black_box(&items), 5000, &Diagnostics::silent())))
    });
    group.finish();
}

criterion_group!(benches, bench_prefix_tree, bench_against_oracle);
criterion_main!(benches);
