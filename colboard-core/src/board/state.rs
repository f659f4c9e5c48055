//! Immutable board snapshots
//!
//! A [`BoardState`] is never changed in place once handed out: every move
//! produces a new snapshot, so consumers can compare old and new states.

use std::collections::{HashMap, HashSet};

use super::operation::{Operation, OperationId, Outcome, Trigger};
use crate::error::{BoardError, BoardResult};
use crate::models::{Column, ColumnId, basic_board_data};
use crate::reorder::reorder;

/// Column order plus the columns themselves and the latest move.
///
/// `ordered_column_ids` is always a permutation of the keys of `column_map`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    column_map: HashMap<ColumnId, Column>,
    ordered_column_ids: Vec<ColumnId>,
    last_operation: Option<Operation>,
}

impl BoardState {
    /// Creates a board from columns in display order.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::DuplicateColumn` if two columns share an ID.
    pub fn new(columns: Vec<Column>) -> BoardResult<Self> {
        let mut column_map = HashMap::with_capacity(columns.len());
        let mut ordered_column_ids = Vec::with_capacity(columns.len());

        for column in columns {
            let column_id = column.column_id.clone();
            if column_map.insert(column_id.clone(), column).is_some() {
                return Err(BoardError::DuplicateColumn(column_id));
            }
            ordered_column_ids.push(column_id);
        }

        Ok(Self {
            column_map,
            ordered_column_ids,
            last_operation: None,
        })
    }

    /// Creates the board the application starts with.
    #[must_use]
    pub fn basic() -> Self {
        let columns = basic_board_data();
        let ordered_column_ids = columns.iter().map(|c| c.column_id.clone()).collect();
        let column_map = columns
            .into_iter()
            .map(|column| (column.column_id.clone(), column))
            .collect();
        Self {
            column_map,
            ordered_column_ids,
            last_operation: None,
        }
    }

    /// Column IDs in display order.
    #[must_use]
    pub fn ordered_column_ids(&self) -> &[ColumnId] {
        &self.ordered_column_ids
    }

    /// Returns a column by ID.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.column_map.get(column_id)
    }

    /// Iterates over the columns in display order.
    pub fn iter_columns(&self) -> impl Iterator<Item = &Column> {
        self.ordered_column_ids
            .iter()
            .filter_map(|id| self.column_map.get(id))
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> Vec<Column> {
        self.iter_columns().cloned().collect()
    }

    /// Returns the position of a column in the current order.
    #[must_use]
    pub fn index_of(&self, column_id: &ColumnId) -> Option<usize> {
        self.ordered_column_ids.iter().position(|id| id == column_id)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered_column_ids.len()
    }

    /// Returns true if the board has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered_column_ids.is_empty()
    }

    /// The most recent move, `None` before the first one.
    #[must_use]
    pub const fn last_operation(&self) -> Option<&Operation> {
        self.last_operation.as_ref()
    }

    /// Returns true if the order is a permutation of the column map's keys.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let unique: HashSet<&ColumnId> = self.ordered_column_ids.iter().collect();
        unique.len() == self.ordered_column_ids.len()
            && unique.len() == self.column_map.len()
            && unique.iter().all(|id| self.column_map.contains_key(*id))
    }

    /// Produces the snapshot after moving the column at `start_index` to
    /// `finish_index`.
    ///
    /// Moving a column onto its own index keeps the order but still records
    /// the operation.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::IndexOutOfRange` if either index is outside the
    /// current order.
    pub fn commit_reorder(
        &self,
        start_index: usize,
        finish_index: usize,
        trigger: Trigger,
        id: OperationId,
    ) -> BoardResult<Self> {
        let ordered_column_ids = reorder(&self.ordered_column_ids, start_index, finish_index)?;
        let column_id = self.ordered_column_ids[start_index].clone();

        Ok(Self {
            column_map: self.column_map.clone(),
            ordered_column_ids,
            last_operation: Some(Operation {
                id,
                trigger,
                outcome: Outcome::ColumnReorder {
                    column_id,
                    start_index,
                    finish_index,
                },
            }),
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::basic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(state: &BoardState) -> Vec<&str> {
        state.ordered_column_ids().iter().map(ColumnId::as_str).collect()
    }

    #[test]
    fn basic_board_order() {
        let state = BoardState::basic();
        assert_eq!(ids(&state), ["confluence", "jira", "trello"]);
        assert!(state.last_operation().is_none());
        assert!(state.is_consistent());
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let err = BoardState::new(vec![Column::new("a", "A"), Column::new("a", "Again")])
            .unwrap_err();
        assert_eq!(err, BoardError::DuplicateColumn(ColumnId::from("a")));
    }

    #[test]
    fn commit_moves_column_and_records_operation() {
        let state = BoardState::basic();
        let next = state
            .commit_reorder(0, 2, Trigger::Pointer, OperationId(1))
            .unwrap();

        assert_eq!(ids(&next), ["jira", "trello", "confluence"]);
        let op = next.last_operation().unwrap();
        assert_eq!(op.trigger, Trigger::Pointer);
        assert_eq!(
            op.outcome,
            Outcome::ColumnReorder {
                column_id: ColumnId::from("confluence"),
                start_index: 0,
                finish_index: 2,
            }
        );
    }

    #[test]
    fn commit_leaves_previous_snapshot_untouched() {
        let state = BoardState::basic();
        let _next = state
            .commit_reorder(2, 0, Trigger::Keyboard, OperationId(1))
            .unwrap();
        assert_eq!(ids(&state), ["confluence", "jira", "trello"]);
        assert!(state.last_operation().is_none());
    }

    #[test]
    fn noop_commit_is_still_recorded() {
        let state = BoardState::basic();
        let next = state
            .commit_reorder(1, 1, Trigger::Keyboard, OperationId(4))
            .unwrap();
        assert_eq!(ids(&next), ids(&state));
        assert_eq!(next.last_operation().map(|op| op.id), Some(OperationId(4)));
    }

    #[test]
    fn out_of_range_commit_fails() {
        let state = BoardState::basic();
        let err = state
            .commit_reorder(3, 0, Trigger::Keyboard, OperationId(1))
            .unwrap_err();
        assert_eq!(err, BoardError::IndexOutOfRange { index: 3, len: 3 });
    }

    #[test]
    fn columns_follow_order() {
        let state = BoardState::basic()
            .commit_reorder(2, 0, Trigger::Keyboard, OperationId(1))
            .unwrap();
        let titles: Vec<String> = state.columns().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Trello", "Confluence", "Jira"]);
        assert_eq!(state.index_of(&ColumnId::from("jira")), Some(2));
    }

    #[test]
    fn empty_board_is_consistent() {
        let state = BoardState::new(Vec::new()).unwrap();
        assert!(state.is_empty());
        assert!(state.is_consistent());
    }
}
