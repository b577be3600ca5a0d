//! The answer type shared by every strategy.
//!
//! A `Subsequence` names a contiguous window `[start, start + length)` of the
//! item sequence together with the sum of that window.

/// A contiguous run of items.
///
/// `length == 0` means no run was found. The default value (`start = 0`,
/// `length = 0`, `sum = 0`) is what every strategy returns in that case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Subsequence {
    /// Zero-based index of the first item.
    pub start: usize,
    /// Number of items in the run.
    pub length: usize,
    /// Sum of the items in the run.
    pub sum: i64,
}

impl Subsequence {
    pub fn new(start: usize, length: usize, sum: i64) -> Self {
        Self { start, length, sum }
    }

    /// Exclusive end index.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// True when a run of at least one item was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.is_empty()
    }

    /// Start index as printed by the command-line tool.
    #[inline]
    pub fn one_based_start(&self) -> usize {
        self.start + 1
    }

    /// Longest wins; on equal length the earlier start wins.
    ///
    /// This is the order the tree driver and the oracle produce implicitly by
    /// scanning starts left to right and replacing only on strictly greater
    /// length.
    pub fn preferred(self, other: Subsequence) -> Subsequence {
        if other.length > self.length
            || (other.length == self.length && other.start < self.start)
        {
            other
        } else {
            self
        }
    }
}
