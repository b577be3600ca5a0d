//! Exhaustive reference strategy.
//!
//! Tries every window, extending each start to the right while keeping a
//! running sum. O(N²) time, O(1) extra space. It exists to validate the
//! faster strategies and should not be used on large inputs.

use crate::diagnostics::Diagnostics;
use crate::subsequence::Subsequence;
use crate::traits::RunStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl RunStrategy for BruteForce {
    fn name(&self) -> &'static str {
        "brute_force"
    }

    fn solve(&self, items: &[i32], max_sum: i64, _diag: &Diagnostics<'_>) -> Subsequence {
        let n = items.len();
        let mut best = Subsequence::default();

        for start in 0..n {
            // No later start can beat a run this long.
            if n - start <= best.length {
                break;
            }
            let mut sum = 0i64;
            for (offset, &item) in items[start..].iter().enumerate() {
                sum += i64::from(item);
                let length = offset + 1;
                if sum <= max_sum && length > best.length {
                    best = Subsequence::new(start, length, sum);
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(items: &[i32], max_sum: i64) -> Subsequence {
        BruteForce.solve(items, max_sum, &Diagnostics::silent())
    }

    #[test]
    fn empty_input() {
        assert_eq!(solve(&[], 10), Subsequence::default());
    }

    #[test]
    fn alternating_signs() {
        assert_eq!(solve(&[1, -2, 3, -4, 5], 0), Subsequence::new(0, 4, -2));
    }

    #[test]
    fn nothing_fits() {
        assert!(solve(&[5, 5, 5], 4).is_empty());
    }

    #[test]
    fn tie_keeps_earliest_start() {
        // The single 2s fit, but the pair [1, 1] is longer.
        assert_eq!(solve(&[2, 3, 2, 1, 1], 2), Subsequence::new(3, 2, 2));
        assert_eq!(solve(&[2, 3, 2], 2), Subsequence::new(0, 1, 2));
    }
}
