//! Property-based tests for destination resolution
//!
//! These tests check that the finish index produced for a drop always puts
//! the dragged column on the side of the target the edge asked for.

use colboard_core::{Axis, Edge, EdgeHint, reorder, resolve_destination};
use proptest::prelude::*;

/// Strategy for generating closest edges, including "no edge"
fn edge_strategy() -> impl Strategy<Value = Option<Edge>> {
    prop_oneof![
        Just(None),
        Just(Some(Edge::Top)),
        Just(Some(Edge::Right)),
        Just(Some(Edge::Bottom)),
        Just(Some(Edge::Left)),
    ]
}

/// Strategy for generating layout axes
fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Horizontal), Just(Axis::Vertical)]
}

/// Strategy for a list length plus a start and target index inside it
fn drop_strategy() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..15).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For valid input the finish index is always inside the list.
    #[test]
    fn prop_finish_index_is_valid(
        (len, start, target) in drop_strategy(),
        edge in edge_strategy(),
        axis in axis_strategy(),
    ) {
        let finish = resolve_destination(start, target, edge, axis);
        prop_assert!(finish < len, "finish {} out of range for {} columns", finish, len);
    }

    /// Dropping an element on itself never moves it.
    #[test]
    fn prop_self_drop_is_noop(
        (_len, start, _target) in drop_strategy(),
        edge in edge_strategy(),
        axis in axis_strategy(),
    ) {
        prop_assert_eq!(resolve_destination(start, start, edge, axis), start);
    }

    /// After the move the dragged element sits on the requested side of the
    /// target.
    #[test]
    fn prop_element_lands_next_to_target(
        (len, start, target) in drop_strategy(),
        edge in edge_strategy(),
        axis in axis_strategy(),
    ) {
        prop_assume!(start != target);

        let list: Vec<usize> = (0..len).collect();
        let finish = resolve_destination(start, target, edge, axis);
        let result = reorder(&list, start, finish).unwrap();

        prop_assert_eq!(result[finish], start);
        match EdgeHint::from_closest_edge(edge, axis) {
            EdgeHint::Before => prop_assert_eq!(result[finish + 1], target),
            EdgeHint::After => prop_assert_eq!(result[finish - 1], target),
            EdgeHint::None => prop_assert_eq!(finish, target),
        }
    }
}

#[test]
fn boundary_cases() {
    // [A, B, C]: A onto C
    assert_eq!(resolve_destination(0, 2, Some(Edge::Left), Axis::Horizontal), 1);
    assert_eq!(resolve_destination(0, 2, Some(Edge::Right), Axis::Horizontal), 2);
    // C onto A
    assert_eq!(resolve_destination(2, 0, Some(Edge::Right), Axis::Horizontal), 1);
    assert_eq!(resolve_destination(2, 0, Some(Edge::Left), Axis::Horizontal), 0);
    // no edge
    assert_eq!(resolve_destination(0, 2, None, Axis::Horizontal), 2);
}
