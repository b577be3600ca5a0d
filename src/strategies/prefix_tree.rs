//! Prefix-sum tree strategy.
//!
//! For a fixed start `i`, the run `items[i..=j]` fits under `max_sum` iff
//! `sums[j] <= max_sum + sums[i - 1]`. The driver keeps that right-hand side
//! as a running `target`, so each start is a single tree query: "rightmost
//! `j >= i` with `sums[j] <= target`". The first hit for a start is therefore
//! the longest run beginning there.
//!
//! Starts are scanned left to right and the best run is replaced only by a
//! strictly longer one, so ties go to the earliest start. The scan stops as
//! soon as the remaining items cannot beat the best length found.

use crate::diagnostics::Diagnostics;
use crate::prefix::running_sums;
use crate::subsequence::Subsequence;
use crate::traits::RunStrategy;
use crate::tree::PrefixTree;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixTreeSolver;

impl RunStrategy for PrefixTreeSolver {
    fn name(&self) -> &'static str {
        "prefix_tree"
    }

    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
        let sums = running_sums(items);
        let tree = PrefixTree::build(&sums);
        diag.check(
            sums.is_empty() || tree.root().is_some(),
            "prefix_tree::solve",
            || format!("tree over {} sums has no root", sums.len()),
        );

        let n = sums.len();
        let mut best = Subsequence::default();
        let mut target = max_sum;
        let mut drop_sum = 0i64;

        for (i, &item) in items.iter().enumerate() {
            if best.length >= n - i {
                break;
            }

            if let Some(end) = tree.rightmost_at_most(target, i, diag) {
                if !diag.check(end >= i, "prefix_tree::solve", || {
                    format!("search returned index {end} before left edge {i}")
                }) {
                    continue;
                }
                let length = end - i + 1;
                if length > best.length {
                    best = Subsequence::new(i, length, sums[end] - drop_sum);
                    diag.trace(|| {
                        format!(
                            "best run: start={} length={} sum={}",
                            best.start, best.length, best.sum
                        )
                    });
                }
            }

            target = target.saturating_add(i64::from(item));
            drop_sum += i64::from(item);
        }
        best
    }
}
