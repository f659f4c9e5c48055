//! Pointer drop handling

use std::fmt;

use super::engine::Board;
use super::operation::{OperationId, Trigger};
use crate::drag_drop::{DragKind, DropEvent, extract_closest_edge, resolve_destination};
use crate::error::BoardError;
use crate::models::ColumnId;
use crate::tracing::span_names;

/// Why a drop notification did not change the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The drag was started by another board
    ForeignInstance,
    /// The drag ended outside every drop target
    NoDropTargets,
    /// The dragged entity is not a column
    NotAColumn(DragKind),
    /// The source carried no column ID
    MissingSourceColumn,
    /// The source column is not on this board
    SourceNotOnBoard(ColumnId),
    /// The innermost target carried no column ID
    MissingTargetColumn,
    /// The target column is not on this board
    TargetNotOnBoard(ColumnId),
    /// The resolved move was rejected by the board state
    Rejected(BoardError),
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignInstance => write!(f, "drag belongs to another board"),
            Self::NoDropTargets => write!(f, "dropped outside any target"),
            Self::NotAColumn(kind) => write!(f, "dragged {kind} is not a column"),
            Self::MissingSourceColumn => write!(f, "source has no column id"),
            Self::SourceNotOnBoard(id) => write!(f, "source column {id} is not on the board"),
            Self::MissingTargetColumn => write!(f, "target has no column id"),
            Self::TargetNotOnBoard(id) => write!(f, "target column {id} is not on the board"),
            Self::Rejected(e) => write!(f, "move rejected: {e}"),
        }
    }
}

/// Result of handling one drop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResolution {
    /// A reorder was committed
    Committed(OperationId),
    /// The board was left unchanged
    Ignored(IgnoreReason),
}

impl DropResolution {
    /// Returns the committed operation, if any.
    #[must_use]
    pub const fn operation_id(&self) -> Option<OperationId> {
        match self {
            Self::Committed(id) => Some(*id),
            Self::Ignored(_) => None,
        }
    }
}

impl<H: Clone + 'static> Board<H> {
    /// Handles a finished pointer drag.
    ///
    /// Malformed or foreign notifications are logged and ignored; they never
    /// reach the caller as errors.
    pub fn handle_drop(&mut self, event: &DropEvent) -> DropResolution {
        let _span = crate::trace_operation!(
            span_names::DROP_HANDLE,
            instance_id = %self.instance_id,
            kind = %event.source.kind
        )
        .entered();

        match self.resolve_drop(event) {
            Ok((start_index, finish_index)) => {
                match self.reorder_column(start_index, finish_index, Trigger::Pointer) {
                    Ok(id) => DropResolution::Committed(id),
                    Err(e) => {
                        tracing::warn!(error = %e, "Drop could not be committed");
                        DropResolution::Ignored(IgnoreReason::Rejected(e))
                    }
                }
            }
            Err(reason) => {
                match reason {
                    IgnoreReason::ForeignInstance
                    | IgnoreReason::NoDropTargets
                    | IgnoreReason::NotAColumn(_) => {
                        tracing::debug!(reason = %reason, "Drop ignored");
                    }
                    _ => tracing::warn!(reason = %reason, "Malformed drop ignored"),
                }
                DropResolution::Ignored(reason)
            }
        }
    }

    fn resolve_drop(&self, event: &DropEvent) -> Result<(usize, usize), IgnoreReason> {
        let source = &event.source;
        if source.instance_id != self.instance_id {
            return Err(IgnoreReason::ForeignInstance);
        }
        let Some(target) = event.first_target() else {
            return Err(IgnoreReason::NoDropTargets);
        };
        if source.kind != DragKind::Column {
            return Err(IgnoreReason::NotAColumn(source.kind.clone()));
        }

        let source_id = source
            .column_id
            .as_ref()
            .ok_or(IgnoreReason::MissingSourceColumn)?;
        let start_index = self
            .state
            .index_of(source_id)
            .ok_or_else(|| IgnoreReason::SourceNotOnBoard(source_id.clone()))?;

        let target_id = target
            .column_id
            .as_ref()
            .ok_or(IgnoreReason::MissingTargetColumn)?;
        let index_of_target = self
            .state
            .index_of(target_id)
            .ok_or_else(|| IgnoreReason::TargetNotOnBoard(target_id.clone()))?;

        let finish_index = resolve_destination(
            start_index,
            index_of_target,
            extract_closest_edge(target),
            self.axis,
        );
        tracing::debug!(
            source = %source_id,
            target = %target_id,
            start_index,
            index_of_target,
            finish_index,
            "Drop resolved"
        );
        Ok((start_index, finish_index))
    }
}
