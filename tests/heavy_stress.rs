#![cfg(feature = "heavy")]
use bounded_run::{
    strategies::{BruteForce, PrefixTreeSolver},
    RunEngine,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-200..800)).collect()
}

#[test]
fn heavy_seeded_cases_match_oracle() {
    for seed in [444u64, 445, 446] {
        let mut rng = StdRng::seed_from_u64(seed);
        let items = random_items(&mut rng, 20_000);
        let fast = RunEngine::new(PrefixTreeSolver).run(&items, 5000);
        let slow = RunEngine::new(BruteForce).run(&items, 5000);
        assert_eq!(fast, slow, "seed {seed}");
    }
}

#[test]
fn heavy_prefix_tree_large_input() {
    let mut rng = StdRng::seed_from_u64(123);
    let items = random_items(&mut rng, 1_000_000);
    let best = RunEngine::new(PrefixTreeSolver).run(&items, 5000);
    assert!(best.is_found());
    assert!(best.sum <= 5000);
    assert!(best.end() <= items.len());
}
