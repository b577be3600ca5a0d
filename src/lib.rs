//! Longest bounded-sum run
//!
//! This crate finds the longest contiguous run of a signed integer sequence
//! whose sum does not exceed a threshold, and reports where it starts, how
//! long it is and what it sums to.
//!
//! ## Core idea
//! 1. Turn the items into running sums: the run `items[i..=j]` fits under
//!    `max_sum` exactly when `sums[j] <= max_sum + sums[i - 1]`.
//! 2. Build a balanced tree over the sums where every node carries the min/max
//!    of its range, so whole subtrees can be skipped.
//! 3. For every start `i`, ask the tree for the *rightmost* `j >= i` under the
//!    shifted threshold and keep the longest answer.
//!
//! The tree search turns the quadratic scan into O(N log N) while returning
//! exactly the same run as the exhaustive oracle, including its tie-break
//! (earliest start wins).
//!
//! ## Quick start
//! ```
//! use bounded_run::{strategies::PrefixTreeSolver, RunEngine};
//!
//! let best = RunEngine::new(PrefixTreeSolver).run(&[1, -2, 3, -4, 5], 0);
//! assert_eq!(best.length, 4);
//! assert_eq!(best.start, 0);
//! assert_eq!(best.sum, -2);
//! ```
//!
//! ## Strategies
//! The `strategies` module contains interchangeable implementations of
//! [`RunStrategy`]:
//! - prefix-sum tree search (the fast path)
//! - brute force (the correctness oracle)
//! - memoized shrink recursion with a dead-path cache
//!
//! All three agree on every input, which is what the differential tests in
//! `tests/` check.

pub mod builder;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod input;
pub mod prefix;
pub mod strategies;
pub mod subsequence;
pub mod traits;
pub mod tree;

pub use crate::builder::RunEngineBuilder;
pub use crate::config::{DiagnosticLevel, SolverConfig};
pub use crate::diagnostics::{DiagnosticSink, Diagnostics};
pub use crate::engine::RunEngine;
pub use crate::error::{Result, RunError};
pub use crate::subsequence::Subsequence;
pub use crate::traits::RunStrategy;
