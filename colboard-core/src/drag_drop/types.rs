//! Payload types carried by drop notifications
//!
//! These mirror what the drag primitive layer hands to the board: the data
//! attached to the dragged element and the data of every drop target under
//! the pointer, innermost first.

use std::fmt;

use uuid::Uuid;

use super::hitbox::Edge;
use crate::models::ColumnId;

/// Identifier of one mounted board.
///
/// Drag sources carry the ID of the board that created them, so a board
/// only reacts to drags it originated even when several boards are mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    /// Creates a new random instance ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Kind of entity being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragKind {
    /// A whole column
    Column,
    /// A card inside a column (handled by a card engine, not this board)
    Card,
    /// Anything else a foreign drag source declared
    Other(String),
}

impl fmt::Display for DragKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Card => write!(f, "card"),
            Self::Other(kind) => write!(f, "{kind}"),
        }
    }
}

/// Data attached to the dragged element when the drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceData {
    /// What is being dragged
    pub kind: DragKind,
    /// Column the source belongs to (absent for malformed sources)
    pub column_id: Option<ColumnId>,
    /// Board that created the drag source
    pub instance_id: InstanceId,
}

impl SourceData {
    /// Creates the source data a column's drag handle attaches.
    #[must_use]
    pub fn column(column_id: impl Into<ColumnId>, instance_id: InstanceId) -> Self {
        Self {
            kind: DragKind::Column,
            column_id: Some(column_id.into()),
            instance_id,
        }
    }
}

/// Data of a drop target, as produced by the target's `get_data` hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetData {
    /// Column the target represents (absent for malformed targets)
    pub column_id: Option<ColumnId>,
    /// Closest edge of the target to the pointer, if hit testing ran
    pub closest_edge: Option<Edge>,
}

impl TargetData {
    /// Creates target data for a column without edge information.
    #[must_use]
    pub fn column(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: Some(column_id.into()),
            closest_edge: None,
        }
    }

    /// Attaches a closest edge.
    #[must_use]
    pub const fn with_edge(mut self, edge: Edge) -> Self {
        self.closest_edge = Some(edge);
        self
    }
}

/// A drop notification delivered by the drag primitive layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// The dragged element's data
    pub source: SourceData,
    /// Targets under the pointer at drop time, innermost first
    pub drop_targets: Vec<TargetData>,
}

impl DropEvent {
    /// Creates a drop event.
    #[must_use]
    pub fn new(source: SourceData, drop_targets: Vec<TargetData>) -> Self {
        Self {
            source,
            drop_targets,
        }
    }

    /// Returns the innermost drop target, if the drop landed on anything.
    #[must_use]
    pub fn first_target(&self) -> Option<&TargetData> {
        self.drop_targets.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_ids_are_unique() {
        assert_ne!(InstanceId::new(), InstanceId::new());
    }

    #[test]
    fn instance_id_display() {
        let id = InstanceId(Uuid::nil());
        assert!(id.to_string().starts_with("Instance("));
    }

    #[test]
    fn column_source_is_tagged_as_column() {
        let source = SourceData::column("jira", InstanceId::new());
        assert_eq!(source.kind, DragKind::Column);
        assert_eq!(source.column_id, Some(ColumnId::from("jira")));
    }

    #[test]
    fn drag_kind_display() {
        assert_eq!(DragKind::Column.to_string(), "column");
        assert_eq!(DragKind::Other("file".into()).to_string(), "file");
    }

    #[test]
    fn first_target_of_empty_drop_is_none() {
        let event = DropEvent::new(SourceData::column("jira", InstanceId::new()), Vec::new());
        assert!(event.first_target().is_none());
    }
}
