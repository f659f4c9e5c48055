//! Keyboard moves offered by a column's action menu

use std::fmt;

/// A keyboard-triggered column move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardMove {
    /// One position towards the start
    Left,
    /// One position towards the end
    Right,
    /// To the first position
    First,
    /// To the last position
    Last,
}

impl KeyboardMove {
    /// All moves in menu order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::First, Self::Last];

    /// Returns the finish index of this move for the column at
    /// `start_index` on a board of `len` columns.
    ///
    /// Returns `None` when the move is not possible from there, such as
    /// `Left` on the first column.
    #[must_use]
    pub const fn finish_index(self, start_index: usize, len: usize) -> Option<usize> {
        if start_index >= len {
            return None;
        }
        let at_start = start_index == 0;
        let at_end = start_index + 1 == len;
        match self {
            Self::Left if !at_start => Some(start_index - 1),
            Self::Right if !at_end => Some(start_index + 1),
            Self::First if !at_start => Some(0),
            Self::Last if !at_end => Some(len - 1),
            _ => None,
        }
    }

    /// Menu label of the move.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Move left",
            Self::Right => "Move right",
            Self::First => "Move to first position",
            Self::Last => "Move to last position",
        }
    }
}

impl fmt::Display for KeyboardMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Moves a menu should offer for the column at `start_index`.
#[must_use]
pub fn available_moves(start_index: usize, len: usize) -> Vec<KeyboardMove> {
    KeyboardMove::ALL
        .into_iter()
        .filter(|mv| mv.finish_index(start_index, len).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_column_cannot_move_left() {
        assert_eq!(KeyboardMove::Left.finish_index(0, 3), None);
        assert_eq!(KeyboardMove::First.finish_index(0, 3), None);
        assert_eq!(KeyboardMove::Right.finish_index(0, 3), Some(1));
        assert_eq!(KeyboardMove::Last.finish_index(0, 3), Some(2));
    }

    #[test]
    fn last_column_cannot_move_right() {
        assert_eq!(KeyboardMove::Right.finish_index(2, 3), None);
        assert_eq!(KeyboardMove::Last.finish_index(2, 3), None);
        assert_eq!(KeyboardMove::Left.finish_index(2, 3), Some(1));
        assert_eq!(KeyboardMove::First.finish_index(2, 3), Some(0));
    }

    #[test]
    fn out_of_range_start_has_no_moves() {
        assert!(available_moves(5, 3).is_empty());
    }

    #[test]
    fn single_column_has_no_moves() {
        assert!(available_moves(0, 1).is_empty());
    }

    #[test]
    fn middle_column_offers_everything() {
        assert_eq!(available_moves(1, 3), KeyboardMove::ALL);
    }

    #[test]
    fn labels() {
        assert_eq!(KeyboardMove::Left.to_string(), "Move left");
    }
}
