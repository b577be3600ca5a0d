//! Example: longest run under a threshold with each strategy.
//!
//! Run with:
//! `cargo run --example solve`

use bounded_run::strategies::StrategyKind;
use bounded_run::{input::format_answer, prefix::running_sums, tree::PrefixTree, RunEngine};

fn main() {
    let items = [1, -2, 3, -4, 5];
    let max_sum = 0;

    println!("items: {items:?}, max_sum: {max_sum}");
    for kind in StrategyKind::ALL {
        let best = RunEngine::new(kind.strategy()).run(&items, max_sum);
        println!("{kind:>12}: {}", format_answer(&best, true));
    }

    // The same run, asked of the tree directly: the rightmost running sum at
    // or below the threshold, starting from index 0.
    let sums = running_sums(&items);
    let tree = PrefixTree::build(&sums);
    let end = tree.rightmost_at_most(max_sum, 0, &bounded_run::Diagnostics::silent());
    println!("running sums: {sums:?}");
    println!("tree: {} nodes, height {}", tree.len(), tree.height());
    println!("rightmost sum <= {max_sum}: {end:?}");
}
