//! Property-based tests for the move-element algorithm

use colboard_core::{BoardError, reorder};
use proptest::prelude::*;

/// Strategy for a non-empty list plus two valid indices into it
fn list_and_indices() -> impl Strategy<Value = (Vec<u32>, usize, usize)> {
    prop::collection::vec(any::<u32>(), 1..20).prop_flat_map(|list| {
        let len = list.len();
        (Just(list), 0..len, 0..len)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Reordering never adds, drops or duplicates elements.
    #[test]
    fn prop_reorder_is_a_permutation((list, start, finish) in list_and_indices()) {
        let result = reorder(&list, start, finish).unwrap();

        let mut expected = list.clone();
        let mut actual = result.clone();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// The moved element ends up at the finish index.
    #[test]
    fn prop_moved_element_lands_at_finish((list, start, finish) in list_and_indices()) {
        let result = reorder(&list, start, finish).unwrap();
        prop_assert_eq!(result[finish], list[start]);
    }

    /// Every other element keeps its relative order.
    #[test]
    fn prop_other_elements_keep_relative_order((list, start, finish) in list_and_indices()) {
        let result = reorder(&list, start, finish).unwrap();

        let mut others = list.clone();
        others.remove(start);
        let mut result_others = result.clone();
        result_others.remove(finish);
        prop_assert_eq!(result_others, others);
    }

    /// Moving an element onto its own index is the identity.
    #[test]
    fn prop_same_index_is_identity((list, start, _finish) in list_and_indices()) {
        prop_assert_eq!(reorder(&list, start, start).unwrap(), list);
    }

    /// Moving i to j and then j back to i restores the list.
    #[test]
    fn prop_round_trip_restores_list((list, start, finish) in list_and_indices()) {
        let moved = reorder(&list, start, finish).unwrap();
        let restored = reorder(&moved, finish, start).unwrap();
        prop_assert_eq!(restored, list);
    }

    /// Out-of-range indices are reported, never a panic.
    #[test]
    fn prop_out_of_range_is_an_error(
        list in prop::collection::vec(any::<u32>(), 0..10),
        overshoot in 0usize..5,
    ) {
        let len = list.len();
        let err = reorder(&list, len + overshoot, 0).unwrap_err();
        prop_assert_eq!(err, BoardError::IndexOutOfRange { index: len + overshoot, len });
    }
}
