//! The seam every solving strategy plugs into.
//!
//! A strategy takes the item sequence and a threshold and returns the longest
//! run whose sum is at most the threshold. All strategies share one contract:
//! - the answer is the longest qualifying run;
//! - among equally long runs, the one with the smallest start wins;
//! - no qualifying run is reported as a zero-length [`Subsequence`]
//!   (`Subsequence::default()`).
//!
//! [`RunEngine`](crate::RunEngine) drives a strategy with a
//! [`SolverConfig`](crate::SolverConfig) and a diagnostics sink.

use crate::diagnostics::Diagnostics;
use crate::subsequence::Subsequence;

pub trait RunStrategy {
    /// Short, stable identifier used in logs and probe output.
    fn name(&self) -> &'static str;

    /// Solve one instance.
    ///
    /// Implementations must not panic on internal invariant violations:
    /// they report them through `diag` and treat the affected branch as
    /// yielding no run.
    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence;
}

impl<S: RunStrategy + ?Sized> RunStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
        (**self).solve(items, max_sum, diag)
    }
}

impl<S: RunStrategy + ?Sized> RunStrategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
        (**self).solve(items, max_sum, diag)
    }
}
