//! Strategy driver.
//!
//! [`RunEngine`] pairs a [`RunStrategy`] with a [`SolverConfig`] and owns
//! nothing between calls: every `run` builds its own sums, tree or cache and
//! drops them before returning.

use crate::config::SolverConfig;
use crate::diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
use crate::subsequence::Subsequence;
use crate::traits::RunStrategy;

/// Solver for a given strategy `S`.
///
/// Typical usage:
/// ```
/// use bounded_run::{strategies::PrefixTreeSolver, RunEngine};
///
/// let engine = RunEngine::new(PrefixTreeSolver);
/// let best = engine.run(&[3, 1, -1, 2], 3);
/// println!("length {} starting at {}", best.length, best.one_based_start());
/// assert_eq!((best.length, best.start, best.sum), (3, 0, 3));
/// ```
#[derive(Debug, Clone)]
pub struct RunEngine<S: RunStrategy> {
    strategy: S,
    config: SolverConfig,
}

impl<S: RunStrategy> RunEngine<S> {
    /// Create an engine with the default (silent) configuration.
    pub fn new(strategy: S) -> Self {
        Self::with_config(strategy, SolverConfig::default())
    }

    pub fn with_config(strategy: S, config: SolverConfig) -> Self {
        Self { strategy, config }
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Adjust the configuration in place.
    pub fn config_mut(&mut self) -> &mut SolverConfig {
        &mut self.config
    }

    /// Solve with diagnostics routed to `tracing`.
    pub fn run(&self, items: &[i32], max_sum: i64) -> Subsequence {
        self.run_with_sink(items, max_sum, &TracingSink)
    }

    /// Solve with diagnostics routed to `sink`.
    pub fn run_with_sink(
        &self,
        items: &[i32],
        max_sum: i64,
        sink: &dyn DiagnosticSink,
    ) -> Subsequence {
        let span = tracing::info_span!(
            "solve",
            strategy = self.strategy.name(),
            n = items.len(),
            max_sum
        );
        let _enter = span.enter();

        let diag = Diagnostics::new(self.config.diagnostics, sink);
        let best = self.strategy.solve(items, max_sum, &diag);
        tracing::debug!(
            start = best.start,
            length = best.length,
            sum = best.sum,
            "solve finished"
        );
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiagnosticLevel;
    use crate::diagnostics::RecordingSink;
    use crate::strategies::{BruteForce, PrefixTreeSolver};

    struct Faulty;

    impl RunStrategy for Faulty {
        fn name(&self) -> &'static str {
            "faulty"
        }

        fn solve(&self, _items: &[i32], _max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
            diag.violation("faulty::solve", || "always broken".to_string());
            Subsequence::default()
        }
    }

    #[test]
    fn engine_forwards_to_strategy() {
        let engine = RunEngine::new(BruteForce);
        assert_eq!(engine.strategy().name(), "brute_force");
        assert_eq!(engine.run(&[1, -2, 3, -4, 5], 0), Subsequence::new(0, 4, -2));
    }

    #[test]
    fn config_level_gates_the_sink() {
        let sink = RecordingSink::new();
        let silent = RunEngine::new(Faulty);
        silent.run_with_sink(&[1], 0, &sink);
        assert!(sink.violations().is_empty());

        let mut loud = RunEngine::new(Faulty);
        loud.config_mut().diagnostics = DiagnosticLevel::Assert;
        loud.run_with_sink(&[1], 0, &sink);
        assert_eq!(sink.violations(), vec!["faulty::solve: always broken"]);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let engine = RunEngine::new(PrefixTreeSolver);
        let items = [7, -3, 2, 2, -8, 5, 1, -1];
        let first = engine.run(&items, 2);
        for _ in 0..3 {
            assert_eq!(engine.run(&items, 2), first);
        }
    }
}
