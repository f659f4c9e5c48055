//! Destination index resolution for axis-aware lists
//!
//! The reorder algorithm removes the dragged element before reinserting it,
//! so "before the target" and "after the target" mean different indices
//! depending on whether the drag moves forward or backward in the list.

use serde::{Deserialize, Serialize};

use super::hitbox::Edge;

/// The axis a list is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left to right (columns on a board)
    #[default]
    Horizontal,
    /// Top to bottom (cards in a column)
    Vertical,
}

/// Which side of the drop target the dragged element lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeHint {
    /// Land immediately before the target
    Before,
    /// Land immediately after the target
    After,
    /// No edge information: land on the target's own position
    None,
}

impl EdgeHint {
    /// Interprets a closest edge along an axis.
    ///
    /// Only the trailing edge of the axis (right for horizontal, bottom for
    /// vertical) means "after"; every other edge means "before".
    #[must_use]
    pub const fn from_edge(edge: Edge, axis: Axis) -> Self {
        match (axis, edge) {
            (Axis::Horizontal, Edge::Right) | (Axis::Vertical, Edge::Bottom) => Self::After,
            _ => Self::Before,
        }
    }

    /// Interprets an optional closest edge along an axis.
    #[must_use]
    pub const fn from_closest_edge(edge: Option<Edge>, axis: Axis) -> Self {
        match edge {
            Some(edge) => Self::from_edge(edge, axis),
            None => Self::None,
        }
    }
}

/// Resolves the finish index for dropping the element at `start_index` on
/// the element at `index_of_target`.
///
/// The result indexes the list after the dragged element was removed. For
/// valid input (both indices inside the list) it is always a valid index of
/// that list.
#[must_use]
pub const fn resolve_destination(
    start_index: usize,
    index_of_target: usize,
    closest_edge: Option<Edge>,
    axis: Axis,
) -> usize {
    destination_for_hint(
        start_index,
        index_of_target,
        EdgeHint::from_closest_edge(closest_edge, axis),
    )
}

/// Resolves the finish index from an already interpreted edge hint.
#[must_use]
pub const fn destination_for_hint(
    start_index: usize,
    index_of_target: usize,
    hint: EdgeHint,
) -> usize {
    // dropping on itself never moves anything
    if start_index == index_of_target {
        return start_index;
    }

    let moving_forward = start_index < index_of_target;
    match hint {
        EdgeHint::None => index_of_target,
        EdgeHint::After if moving_forward => index_of_target,
        EdgeHint::After => index_of_target + 1,
        EdgeHint::Before if moving_forward => index_of_target - 1,
        EdgeHint::Before => index_of_target,
    }
}
