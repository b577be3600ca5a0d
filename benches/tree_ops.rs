use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use bounded_run::{prefix::running_sums, tree::PrefixTree, Diagnostics};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_sums(rng: &mut StdRng, len: usize) -> Vec<i64> {
    let items: Vec<i32> = (0..len).map(|_| rng.gen_range(-500..500)).collect();
    running_sums(&items)
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let sums = random_sums(&mut rng, 100_000);

    let mut group = c.benchmark_group("prefix_tree_ops");
    group.bench_function("build_100k", |b| {
        b.iter(|| {
            let tree = PrefixTree::build(black_box(&sums));
            black_box(tree.len());
        })
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let sums = random_sums(&mut rng, 100_000);
    let tree = PrefixTree::build(&sums);

    let mut group = c.benchmark_group("prefix_tree_ops");
    group.bench_function("rightmost_at_most", |b| {
        b.iter_batched(
            || {
                let threshold = rng.gen_range(-5_000..5_000);
                let left_edge = rng.gen_range(0..sums.len());
                (threshold, left_edge)
            },
            |(threshold, left_edge)| {
                black_box(tree.rightmost_at_most(threshold, left_edge, &Diagnostics::silent()))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_search);
criterion_main!(benches);
