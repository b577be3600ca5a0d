use bounded_run::{
    config::DiagnosticLevel,
    diagnostics::RecordingSink,
    prefix::running_sums,
    tree::PrefixTree,
    Diagnostics,
};
use proptest::prelude::*;

fn linear_rightmost(sums: &[i64], max_sum: i64, left_edge: usize) -> Option<usize> {
    (left_edge..sums.len()).rev().find(|&i| sums[i] <= max_sum)
}

proptest! {
    #[test]
    fn built_trees_are_valid(items in prop::collection::vec(-1000i32..1000, 0..500)) {
        let sums = running_sums(&items);
        let tree = PrefixTree::build(&sums);
        prop_assert!(tree.validate().is_ok(), "{:?}", tree.validate());
        if !sums.is_empty() {
            let leaves = tree.nodes().iter().filter(|n| n.is_leaf).count();
            prop_assert_eq!(leaves, sums.len().div_ceil(2));
            // Every pairing merges two nodes, so one branch per merge.
            prop_assert_eq!(tree.len(), 2 * leaves - 1);
        }
    }

    #[test]
    fn search_matches_linear_scan(
        items in prop::collection::vec(-100i32..100, 1..200),
        max_sum in -500i64..500,
        edge_seed in 0usize..1000,
    ) {
        let sums = running_sums(&items);
        let tree = PrefixTree::build(&sums);
        let left_edge = edge_seed % (sums.len() + 1);

        let sink = RecordingSink::new();
        let diag = Diagnostics::new(DiagnosticLevel::Assert, &sink);
        prop_assert_eq!(
            tree.rightmost_at_most(max_sum, left_edge, &diag),
            linear_rightmost(&sums, max_sum, left_edge)
        );
        prop_assert!(sink.violations().is_empty());
    }

    #[test]
    fn height_stays_logarithmic(len in 1usize..5000) {
        let sums: Vec<i64> = (0..len as i64).collect();
        let tree = PrefixTree::build(&sums);
        let leaves = len.div_ceil(2);
        let bound = (usize::BITS - (leaves - 1).leading_zeros()) as usize + 1;
        prop_assert!(tree.height() <= bound, "height {} > {} for len {}", tree.height(), bound, len);
    }
}
