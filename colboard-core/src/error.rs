//! Error types for the colboard core library
//!
//! Each concern has its own error enum. Tracing setup errors live with the
//! tracing module.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ColumnId;

/// Errors raised by the order model and the reorder algorithm.
///
/// These signal a broken contract upstream (an index the destination
/// resolver should never have produced, or seed data that is not a valid
/// board). Benign drag outcomes are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// An index was outside the current column order.
    #[error("index {index} is out of range for {len} columns")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of columns at the time of the call
        len: usize,
    },

    /// The same column ID appeared twice in the seed data.
    #[error("duplicate column: {0}")]
    DuplicateColumn(ColumnId),

    /// The column is not part of the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),
}

/// Errors raised by the UI handle registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No handle is registered for the column (not mounted, or already
    /// unmounted).
    #[error("no handle registered for column: {0}")]
    NotFound(ColumnId),
}

/// Errors raised while loading board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for a board.
    #[error("failed to parse board configuration: {0}")]
    Parse(String),

    /// The configuration parsed but describes an unusable board.
    #[error("invalid board configuration: {0}")]
    Validation(String),
}

/// Result type for order model operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_out_of_range_display() {
        let err = BoardError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index 5 is out of range for 3 columns");
    }

    #[test]
    fn registry_not_found_display() {
        let err = RegistryError::NotFound(ColumnId::from("jira"));
        assert!(err.to_string().contains("jira"));
    }

    #[test]
    fn config_validation_display() {
        let err = ConfigError::Validation("no columns".to_string());
        assert!(err.to_string().contains("no columns"));
    }
}
