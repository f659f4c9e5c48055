//! The record of the most recent move
//!
//! An operation only exists to drive one-shot side effects (flash and
//! announcement) after a move. It is not part of the durable order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ColumnId;

/// Sequence number of a committed operation within one board.
///
/// Effects are edge-triggered on a change of this ID, so two operations with
/// identical content are still told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(pub u64);

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation({})", self.0)
    }
}

/// What started a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// A pointer drag ending in a drop
    Pointer,
    /// A keyboard command (the default when a caller does not say)
    #[default]
    Keyboard,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer => write!(f, "pointer"),
            Self::Keyboard => write!(f, "keyboard"),
        }
    }
}

/// What a move did.
///
/// Tagged by `kind` so other engines can add outcome kinds later. Kinds this
/// board does not know deserialize to [`Outcome::Unknown`] and are ignored by
/// the effects dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Outcome {
    /// A column moved within the board
    ColumnReorder {
        /// The column that moved
        column_id: ColumnId,
        /// Index before the move
        start_index: usize,
        /// Index after the move
        finish_index: usize,
    },
    /// An outcome kind from a newer or foreign engine
    #[serde(other)]
    Unknown,
}

impl Outcome {
    /// Returns the moved column, if the outcome concerns a column.
    #[must_use]
    pub const fn column_id(&self) -> Option<&ColumnId> {
        match self {
            Self::ColumnReorder { column_id, .. } => Some(column_id),
            Self::Unknown => None,
        }
    }

    /// Returns true if nothing actually moved.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        match self {
            Self::ColumnReorder {
                start_index,
                finish_index,
                ..
            } => *start_index == *finish_index,
            Self::Unknown => true,
        }
    }
}

/// A committed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Sequence number within the board
    pub id: OperationId,
    /// What started the move
    pub trigger: Trigger,
    /// What the move did
    pub outcome: Outcome,
}
