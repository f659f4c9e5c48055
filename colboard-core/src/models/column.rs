//! Column record and identifier types
//!
//! A column is the unit the board reorders. Its contents are opaque to the
//! reorder engine and travel along untouched when the column moves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a column, unique within one board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Creates a column ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A column on the board.
///
/// Items are kept as raw JSON values: the board never looks inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique column identifier
    pub column_id: ColumnId,
    /// Human-readable title, used in announcements
    pub title: String,
    /// Opaque column contents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<serde_json::Value>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub fn new(column_id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Sets the column items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<serde_json::Value>) -> Self {
        self.items = items;
        self
    }
}

/// Returns the fixed data set a new board starts from.
///
/// Deterministic so that snapshots of the board stay stable.
#[must_use]
pub fn basic_board_data() -> Vec<Column> {
    vec![
        Column::new("confluence", "Confluence"),
        Column::new("jira", "Jira"),
        Column::new("trello", "Trello"),
    ]
}
