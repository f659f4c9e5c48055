//! Visual drag state of a single column
//!
//! A column view keeps a [`ColumnViewState`] while a drag is in progress so
//! that it can dim itself when it is the dragged column and draw a drop
//! indicator on the correct edge. The model is free of any toolkit types so
//! it can be tested on its own.

use super::hitbox::Edge;
use super::types::{DragKind, InstanceId, SourceData};

/// Drop target state of one column.
///
/// Independent of [`ColumnViewState::is_dragging`]: a column can be hovered
/// by its own drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnDropState {
    /// Nothing is being dragged over the column
    #[default]
    Idle,
    /// A column is being dragged over this column
    IsColumnOver {
        /// Edge the dragged column would land on
        closest_edge: Option<Edge>,
    },
}

impl ColumnDropState {
    /// A drag entered the column.
    pub fn enter(&mut self, closest_edge: Option<Edge>) {
        *self = Self::IsColumnOver { closest_edge };
    }

    /// The pointer moved while over the column.
    ///
    /// Returns `false` if the closest edge did not change, in which case
    /// the view does not need to redraw.
    pub fn drag(&mut self, closest_edge: Option<Edge>) -> bool {
        let next = Self::IsColumnOver { closest_edge };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    /// The drag left the column.
    pub fn leave(&mut self) {
        *self = Self::Idle;
    }

    /// The drag ended on the column.
    pub fn drop(&mut self) {
        *self = Self::Idle;
    }

    /// Edge a drop indicator should be drawn on, if any.
    #[must_use]
    pub const fn indicator_edge(&self) -> Option<Edge> {
        match self {
            Self::Idle => None,
            Self::IsColumnOver { closest_edge } => *closest_edge,
        }
    }
}

/// Drag state of one column view: its own drag plus its drop target state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnViewState {
    is_dragging: bool,
    drop_state: ColumnDropState,
}

impl ColumnViewState {
    /// The column started being dragged.
    pub const fn drag_start(&mut self) {
        self.is_dragging = true;
    }

    /// The column's drag ended, dropped or cancelled.
    pub const fn drag_end(&mut self) {
        self.is_dragging = false;
    }

    /// Whether the column is the one being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Drop target state.
    #[must_use]
    pub const fn drop_state(&self) -> ColumnDropState {
        self.drop_state
    }

    /// Drop target state, for the drop target callbacks.
    pub const fn drop_state_mut(&mut self) -> &mut ColumnDropState {
        &mut self.drop_state
    }

    /// Whether the view shows no drag feedback at all.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        !self.is_dragging && matches!(self.drop_state, ColumnDropState::Idle)
    }
}

/// Returns true if a column of the board `instance_id` accepts `source`.
///
/// Only columns dragged from the same board can be dropped on a column.
#[must_use]
pub fn can_drop(source: &SourceData, instance_id: InstanceId) -> bool {
    source.instance_id == instance_id && source.kind == DragKind::Column
}
