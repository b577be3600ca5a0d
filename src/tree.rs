//! Min/max tree over a running-sum array.
//!
//! The tree is stored as an arena: a flat `Vec<TreeNode>` whose branch nodes
//! refer to their children by index. It is built bottom-up, one row at a
//! time:
//! - the leaf row pairs up consecutive sums `(2k, 2k + 1)`; an odd trailing
//!   sum becomes a one-element leaf;
//! - each parent row pairs up consecutive nodes of the row below; an odd
//!   trailing node is promoted to the next row as-is.
//!
//! Every node records the minimum and maximum running sum in its range. The
//! search uses the minimum to skip subtrees in which no sum can be at or below
//! the threshold, and visits right children first so the first hit is the
//! highest qualifying index.

use crate::diagnostics::Diagnostics;
use crate::error::{Result, RunError};

/// One node of the arena.
///
/// `first..=last` is the covered index range in the running-sum array.
/// Leaves cover at most two indices and have no children; branch nodes have
/// both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub first: usize,
    pub last: usize,
    pub min: i64,
    pub max: i64,
    pub is_leaf: bool,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl TreeNode {
    fn leaf(first: usize, last: usize, min: i64, max: i64) -> Self {
        Self {
            first,
            last,
            min,
            max,
            is_leaf: true,
            left: None,
            right: None,
        }
    }

    /// Number of running-sum indices covered.
    #[inline]
    pub fn span(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Tree over a borrowed running-sum array.
#[derive(Debug)]
pub struct PrefixTree<'a> {
    sums: &'a [i64],
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl<'a> PrefixTree<'a> {
    /// Build the tree bottom-up. An empty array produces a tree without a
    /// root, on which every search misses.
    pub fn build(sums: &'a [i64]) -> Self {
        #[cfg(feature = "trace-spans")]
        let span = tracing::trace_span!("prefix_tree_build", len = sums.len());
        #[cfg(feature = "trace-spans")]
        let _enter = span.enter();

        let mut tree = PrefixTree {
            sums,
            nodes: Vec::with_capacity(sums.len().max(1)),
            root: None,
        };
        if sums.is_empty() {
            return tree;
        }

        let mut row = tree.push_leaf_row();
        while let Some(parents) = tree.push_parent_row(&row) {
            row = parents;
        }
        tree.root = row.first().copied();
        tree
    }

    fn push(&mut self, node: TreeNode) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(node);
        idx
    }

    fn push_leaf_row(&mut self) -> Vec<usize> {
        let sums = self.sums;
        let mut row = Vec::with_capacity(sums.len().div_ceil(2));

        let mut pairs = sums.chunks_exact(2);
        for (k, pair) in (&mut pairs).enumerate() {
            let first = 2 * k;
            let (min, max) = if pair[0] <= pair[1] {
                (pair[0], pair[1])
            } else {
                (pair[1], pair[0])
            };
            row.push(self.push(TreeNode::leaf(first, first + 1, min, max)));
        }
        if let [odd] = *pairs.remainder() {
            let idx = sums.len() - 1;
            row.push(self.push(TreeNode::leaf(idx, idx, odd, odd)));
        }
        row
    }

    /// Returns `None` once `row` holds a single node: that node is the root.
    fn push_parent_row(&mut self, row: &[usize]) -> Option<Vec<usize>> {
        if row.len() <= 1 {
            return None;
        }
        #[cfg(feature = "trace-spans")]
        let span = tracing::trace_span!("prefix_tree_row", children = row.len());
        #[cfg(feature = "trace-spans")]
        let _enter = span.enter();

        let mut parents = Vec::with_capacity(row.len().div_ceil(2));
        let mut pairs = row.chunks_exact(2);
        for pair in &mut pairs {
            parents.push(self.push_branch(pair[0], pair[1]));
        }
        if let [odd] = *pairs.remainder() {
            parents.push(odd);
        }
        Some(parents)
    }

    fn push_branch(&mut self, left: usize, right: usize) -> usize {
        let (l, r) = (&self.nodes[left], &self.nodes[right]);
        let node = TreeNode {
            first: l.first,
            last: r.last,
            min: l.min.min(r.min),
            max: l.max.max(r.max),
            is_leaf: false,
            left: Some(left),
            right: Some(right),
        };
        self.push(node)
    }

    /// Largest index `i >= left_edge` with `sums[i] <= max_sum`, if any.
    ///
    /// Runs in O(log N): a subtree is entered only if it reaches `left_edge`
    /// and its minimum is within the threshold, and the right child is tried
    /// before the left one.
    pub fn rightmost_at_most(
        &self,
        max_sum: i64,
        left_edge: usize,
        diag: &Diagnostics<'_>,
    ) -> Option<usize> {
        let root = self.root?;
        self.search(root, max_sum, left_edge, diag)
    }

    #[cfg_attr(
        feature = "trace-spans",
        tracing::instrument(level = "trace", skip(self, diag))
    )]
    fn search(
        &self,
        idx: usize,
        max_sum: i64,
        left_edge: usize,
        diag: &Diagnostics<'_>,
    ) -> Option<usize> {
        let Some(node) = self.nodes.get(idx) else {
            diag.violation("prefix_tree::search", || {
                format!("node index {idx} outside arena of {}", self.nodes.len())
            });
            return None;
        };

        if node.last < left_edge || max_sum < node.min {
            return None;
        }

        if node.is_leaf {
            // A leaf holds at most two sums; keep the last one that fits.
            let from = node.first.max(left_edge);
            return (from..=node.last)
                .filter(|&i| self.sums.get(i).is_some_and(|&sum| sum <= max_sum))
                .last();
        }

        if let Some(right) = node.right {
            if let Some(found) = self.search(right, max_sum, left_edge, diag) {
                return Some(found);
            }
        }
        if let Some(left) = node.left {
            return self.search(left, max_sum, left_edge, diag);
        }

        diag.violation("prefix_tree::search", || {
            format!(
                "branch node {idx} covering [{}, {}] has no left child",
                node.first, node.last
            )
        });
        None
    }

    /// The running sums the tree was built over.
    #[inline]
    pub fn sums(&self) -> &'a [i64] {
        self.sums
    }

    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    #[inline]
    pub fn node(&self, idx: usize) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    #[inline]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        fn depth(nodes: &[TreeNode], idx: usize) -> usize {
            let node = &nodes[idx];
            let l = node.left.map_or(0, |c| depth(nodes, c));
            let r = node.right.map_or(0, |c| depth(nodes, c));
            1 + l.max(r)
        }
        self.root.map_or(0, |root| depth(&self.nodes, root))
    }

    /// Check every structural invariant: leaf width and extrema, parent
    /// extrema, contiguous child ranges, and full coverage by the root.
    pub fn validate(&self) -> Result<()> {
        let Some(root) = self.root else {
            return if self.sums.is_empty() && self.nodes.is_empty() {
                Ok(())
            } else {
                Err(RunError::invalid_tree("non-empty input without a root"))
            };
        };

        let root_node = self.checked_node(root)?;
        if root_node.first != 0 || root_node.last + 1 != self.sums.len() {
            return Err(RunError::invalid_tree(format!(
                "root covers [{}, {}] but input has {} sums",
                root_node.first,
                root_node.last,
                self.sums.len()
            )));
        }

        let mut visited = 0usize;
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            visited += 1;
            let node = self.checked_node(idx)?;
            if node.first > node.last {
                return Err(RunError::invalid_tree(format!(
                    "node {idx} has first {} > last {}",
                    node.first, node.last
                )));
            }

            if node.is_leaf {
                if node.span() > 2 || node.left.is_some() || node.right.is_some() {
                    return Err(RunError::invalid_tree(format!(
                        "leaf {idx} covers {} sums or has children",
                        node.span()
                    )));
                }
                let covered = self.sums.get(node.first..=node.last).ok_or_else(|| {
                    RunError::invalid_tree(format!("leaf {idx} indexes past the sums"))
                })?;
                let min = covered.iter().copied().min();
                let max = covered.iter().copied().max();
                if min != Some(node.min) || max != Some(node.max) {
                    return Err(RunError::invalid_tree(format!(
                        "leaf {idx} extrema ({}, {}) do not match its sums",
                        node.min, node.max
                    )));
                }
                continue;
            }

            let (Some(l_idx), Some(r_idx)) = (node.left, node.right) else {
                return Err(RunError::invalid_tree(format!(
                    "branch {idx} is missing a child"
                )));
            };
            let (l, r) = (self.checked_node(l_idx)?, self.checked_node(r_idx)?);
            if l.first != node.first || r.last != node.last || l.last + 1 != r.first {
                return Err(RunError::invalid_tree(format!(
                    "branch {idx} [{}, {}] has children [{}, {}] and [{}, {}]",
                    node.first, node.last, l.first, l.last, r.first, r.last
                )));
            }
            if node.min != l.min.min(r.min) || node.max != l.max.max(r.max) {
                return Err(RunError::invalid_tree(format!(
                    "branch {idx} extrema do not summarize its children"
                )));
            }
            stack.push(l_idx);
            stack.push(r_idx);
        }

        if visited != self.nodes.len() {
            return Err(RunError::invalid_tree(format!(
                "{} nodes reachable from the root, arena holds {}",
                visited,
                self.nodes.len()
            )));
        }
        Ok(())
    }

    fn checked_node(&self, idx: usize) -> Result<&TreeNode> {
        self.nodes
            .get(idx)
            .ok_or_else(|| RunError::invalid_tree(format!("node index {idx} outside arena")))
    }
}
