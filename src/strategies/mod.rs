//! Solving strategies.
//!
//! Each module implements [`RunStrategy`](crate::traits::RunStrategy) for the
//! same contract:
//! - [`prefix_tree`] : rightmost-qualifying-index search over a min/max tree
//!   of running sums, O(N log N).
//! - [`brute_force`] : exhaustive oracle, O(N²).
//! - [`shrink_memo`] : window-shrinking recursion with a solved/dead cache.
//!
//! [`StrategyKind`] and [`AnyStrategy`] select one of them at run time.

pub mod brute_force;
pub mod prefix_tree;
pub mod shrink_memo;

use std::fmt;
use std::str::FromStr;

pub use self::brute_force::BruteForce;
pub use self::prefix_tree::PrefixTreeSolver;
pub use self::shrink_memo::{CacheEntry, ShrinkCache, ShrinkMemo};

use crate::diagnostics::Diagnostics;
use crate::error::RunError;
use crate::subsequence::Subsequence;
use crate::traits::RunStrategy;

/// Names of the available strategies, as accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    #[default]
    PrefixTree,
    BruteForce,
    ShrinkMemo,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::PrefixTree,
        StrategyKind::BruteForce,
        StrategyKind::ShrinkMemo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::PrefixTree => "prefix-tree",
            StrategyKind::BruteForce => "brute-force",
            StrategyKind::ShrinkMemo => "shrink-memo",
        }
    }

    pub fn strategy(self) -> AnyStrategy {
        match self {
            StrategyKind::PrefixTree => AnyStrategy::PrefixTree(PrefixTreeSolver),
            StrategyKind::BruteForce => AnyStrategy::BruteForce(BruteForce),
            StrategyKind::ShrinkMemo => AnyStrategy::ShrinkMemo(ShrinkMemo),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = RunError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| RunError::UnknownStrategy(value.to_string()))
    }
}

/// A strategy chosen at run time.
#[derive(Debug, Clone, Copy)]
pub enum AnyStrategy {
    PrefixTree(PrefixTreeSolver),
    BruteForce(BruteForce),
    ShrinkMemo(ShrinkMemo),
}

impl From<StrategyKind> for AnyStrategy {
    fn from(kind: StrategyKind) -> Self {
        kind.strategy()
    }
}

impl RunStrategy for AnyStrategy {
    fn name(&self) -> &'static str {
        match self {
            AnyStrategy::PrefixTree(s) => s.name(),
            AnyStrategy::BruteForce(s) => s.name(),
            AnyStrategy::ShrinkMemo(s) => s.name(),
        }
    }

    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
        match self {
            AnyStrategy::PrefixTree(s) => s.solve(items, max_sum, diag),
            AnyStrategy::BruteForce(s) => s.solve(items, max_sum, diag),
            AnyStrategy::ShrinkMemo(s) => s.solve(items, max_sum, diag),
        }
    }
}
