//! Move-element reordering of a list
//!
//! Moving is not swapping: the element at `start_index` is removed and
//! reinserted at `finish_index` of the shortened list, so every other
//! element keeps its relative order.

use crate::error::{BoardError, BoardResult};

/// Returns a copy of `list` with the element at `start_index` moved to
/// `finish_index`.
///
/// `finish_index` addresses the list after the element has been removed,
/// which is exactly what the destination resolver produces.
///
/// # Errors
///
/// Returns `BoardError::IndexOutOfRange` if either index is not a valid
/// index of `list`.
pub fn reorder<T: Clone>(
    list: &[T],
    start_index: usize,
    finish_index: usize,
) -> BoardResult<Vec<T>> {
    let len = list.len();
    for index in [start_index, finish_index] {
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
    }

    let mut result = list.to_vec();
    let removed = result.remove(start_index);
    result.insert(finish_index, removed);
    Ok(result)
}
