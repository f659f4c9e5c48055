//! Board seed configuration
//!
//! A board file lists the columns in their initial order:
//!
//! ```toml
//! axis = "horizontal"
//!
//! [[columns]]
//! id = "confluence"
//! title = "Confluence"
//!
//! [[columns]]
//! id = "jira"
//! title = "Jira"
//! items = [{ key = "JRA-1" }]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::drag_drop::Axis;
use crate::error::{ConfigError, ConfigResult};
use crate::models::{Column, basic_board_data};
use crate::tracing::span_names;

/// One column entry of a board file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Column identifier, unique within the board
    pub id: String,
    /// Title shown in the header and used in announcements
    pub title: String,
    /// Opaque column contents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<serde_json::Value>,
}

impl From<ColumnConfig> for Column {
    fn from(config: ColumnConfig) -> Self {
        Self::new(config.id, config.title).with_items(config.items)
    }
}

impl From<Column> for ColumnConfig {
    fn from(column: Column) -> Self {
        Self {
            id: column.column_id.to_string(),
            title: column.title,
            items: column.items,
        }
    }
}

/// Initial board layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Axis the columns are laid out along
    #[serde(default)]
    pub axis: Axis,
    /// Columns in their initial order
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            columns: basic_board_data().into_iter().map(ColumnConfig::from).collect(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a board file's contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML and
    /// `ConfigError::Validation` for an unusable column set.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if an item cannot be expressed in TOML
    /// (for example a JSON `null`).
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks that the configuration describes a usable board.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if there are no columns, an ID or
    /// title is blank, or two columns share an ID.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.columns.is_empty() {
            return Err(ConfigError::Validation("board has no columns".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for (position, column) in self.columns.iter().enumerate() {
            if column.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "column {} has an empty id",
                    position + 1
                )));
            }
            if column.title.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "column '{}' has an empty title",
                    column.id
                )));
            }
            if !seen.insert(column.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate column id '{}'",
                    column.id
                )));
            }
        }
        Ok(())
    }

    /// Builds the initial board state.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the configuration is invalid.
    pub fn build_state(&self) -> ConfigResult<BoardState> {
        self.validate()?;
        let columns = self.columns.iter().cloned().map(Column::from).collect();
        BoardState::new(columns).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Loads and validates a board file.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read, otherwise the
/// errors of [`BoardConfig::from_toml_str`].
pub fn load_board_config(path: &Path) -> ConfigResult<BoardConfig> {
    let _span = crate::trace_operation!(span_names::CONFIG_LOAD, path = %path.display()).entered();

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = BoardConfig::from_toml_str(&content)?;
    tracing::info!(
        columns = config.columns.len(),
        axis = ?config.axis,
        "Board configuration loaded"
    );
    Ok(config)
}
