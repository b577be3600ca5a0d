//! Memoized shrink strategy.
//!
//! The best run inside a window `[start, end]` is either the whole window
//! (when its sum fits) or the best run of one of the two windows obtained by
//! dropping an end item: `[start + 1, end]` or `[start, end - 1]`. Every
//! window visited is memoized by its `(start, end)` pair, including windows
//! proven to contain no qualifying run at all ("dead" windows). Without the
//! dead entries, the windows under an unsolvable region would be recomputed
//! from every path that reaches them.
//!
//! The recursion runs on an explicit stack, so the depth of the window
//! lattice (up to N) never touches the call stack. Memory is bounded by the
//! number of distinct windows visited, which is O(N²) in the worst case.

use std::collections::HashMap;

use crate::diagnostics::Diagnostics;
use crate::subsequence::Subsequence;
use crate::traits::RunStrategy;

/// Memoized outcome for one inclusive `(start, end)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEntry {
    /// Best run inside the window.
    Solved(Subsequence),
    /// No run inside the window fits under the threshold.
    Dead,
}

/// Window cache owned by a single solve.
#[derive(Debug, Default)]
pub struct ShrinkCache {
    entries: HashMap<(usize, usize), CacheEntry>,
    dead: usize,
}

impl ShrinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, start: usize, end: usize) -> Option<CacheEntry> {
        self.entries.get(&(start, end)).copied()
    }

    #[inline]
    pub fn contains(&self, start: usize, end: usize) -> bool {
        self.entries.contains_key(&(start, end))
    }

    pub fn is_dead(&self, start: usize, end: usize) -> bool {
        matches!(self.get(start, end), Some(CacheEntry::Dead))
    }

    fn insert(&mut self, start: usize, end: usize, entry: CacheEntry) {
        if let Some(previous) = self.entries.insert((start, end), entry) {
            if previous == CacheEntry::Dead {
                self.dead -= 1;
            }
        }
        if entry == CacheEntry::Dead {
            self.dead += 1;
        }
    }

    /// Total windows memoized.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn dead_count(&self) -> usize {
        self.dead
    }

    #[inline]
    pub fn solved_count(&self) -> usize {
        self.entries.len() - self.dead
    }
}

/// One unit of pending work.
enum Frame {
    /// Resolve window `[start, end]` whose items sum to `sum`.
    Enter { start: usize, end: usize, sum: i64 },
    /// Both shrunk windows are resolved; combine them.
    Combine { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShrinkMemo;

impl ShrinkMemo {
    /// Solve and hand back the filled cache.
    pub fn solve_with_cache(
        &self,
        items: &[i32],
        max_sum: i64,
        diag: &Diagnostics<'_>,
    ) -> (Subsequence, ShrinkCache) {
        let mut cache = ShrinkCache::new();
        if items.is_empty() {
            return (Subsequence::default(), cache);
        }

        let last = items.len() - 1;
        let total: i64 = items.iter().map(|&x| i64::from(x)).sum();
        let mut stack = vec![Frame::Enter {
            start: 0,
            end: last,
            sum: total,
        }];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter { start, end, sum } => {
                    if end < start {
                        diag.violation("shrink_memo::enter", || {
                            format!("window end {end} precedes start {start}")
                        });
                        continue;
                    }
                    if cache.contains(start, end) {
                        continue;
                    }
                    if sum <= max_sum {
                        let run = Subsequence::new(start, end - start + 1, sum);
                        cache.insert(start, end, CacheEntry::Solved(run));
                    } else if start == end {
                        cache.insert(start, end, CacheEntry::Dead);
                    } else {
                        stack.push(Frame::Combine { start, end });
                        stack.push(Frame::Enter {
                            start,
                            end: end - 1,
                            sum: sum - i64::from(items[end]),
                        });
                        stack.push(Frame::Enter {
                            start: start + 1,
                            end,
                            sum: sum - i64::from(items[start]),
                        });
                    }
                }
                Frame::Combine { start, end } => {
                    let dropped_left = Self::resolved(&cache, start + 1, end, diag);
                    let dropped_right = Self::resolved(&cache, start, end - 1, diag);
                    let entry = match (dropped_left, dropped_right) {
                        (Some(a), Some(b)) => CacheEntry::Solved(a.preferred(b)),
                        (Some(run), None) | (None, Some(run)) => CacheEntry::Solved(run),
                        (None, None) => CacheEntry::Dead,
                    };
                    cache.insert(start, end, entry);
                }
            }
        }

        diag.trace(|| {
            format!(
                "shrink cache: {} windows, {} solved, {} dead",
                cache.len(),
                cache.solved_count(),
                cache.dead_count()
            )
        });

        let best = match cache.get(0, last) {
            Some(CacheEntry::Solved(run)) => run,
            Some(CacheEntry::Dead) => Subsequence::default(),
            None => {
                diag.violation("shrink_memo::solve", || {
                    format!("root window [0, {last}] was never resolved")
                });
                Subsequence::default()
            }
        };
        (best, cache)
    }

    fn resolved(
        cache: &ShrinkCache,
        start: usize,
        end: usize,
        diag: &Diagnostics<'_>,
    ) -> Option<Subsequence> {
        match cache.get(start, end) {
            Some(CacheEntry::Solved(run)) => Some(run),
            Some(CacheEntry::Dead) => None,
            None => {
                diag.violation("shrink_memo::combine", || {
                    format!("child window [{start}, {end}] missing from cache")
                });
                None
            }
        }
    }
}

impl RunStrategy for ShrinkMemo {
    fn name(&self) -> &'static str {
        "shrink_memo"
    }

    fn solve(&self, items: &[i32], max_sum: i64, diag: &Diagnostics<'_>) -> Subsequence {
        self.solve_with_cache(items, max_sum, diag).0
    }
}
