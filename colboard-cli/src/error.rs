//! CLI error types and exit codes.

use colboard_core::{BoardError, ConfigError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, IO or output errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Usage error - unknown column, index out of range or a bad script line
    pub const USAGE_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Column not on the board
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Move rejected by the board
    #[error("Invalid move: {0}")]
    InvalidMove(String),

    /// Script line could not be parsed or run
    #[error("Script error on line {line}: {message}")]
    Script {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<BoardError> for CliError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::ColumnNotFound(id) => Self::ColumnNotFound(id.to_string()),
            BoardError::IndexOutOfRange { .. } => Self::InvalidMove(err.to_string()),
            BoardError::DuplicateColumn(_) => Self::Config(err.to_string()),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, output, IO)
    /// - 2: Usage error (unknown column, bad index, bad script line)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ColumnNotFound(_) | Self::InvalidMove(_) | Self::Script { .. } => {
                exit_codes::USAGE_ERROR
            }
            Self::Config(_) | Self::Output(_) | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }

    /// Attaches a script line number to this error.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::Script { .. } => self,
            other => Self::Script {
                line,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colboard_core::ColumnId;

    #[test]
    fn usage_errors_exit_with_two() {
        let err: CliError = BoardError::ColumnNotFound(ColumnId::from("asana")).into();
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);

        let err: CliError = BoardError::IndexOutOfRange { index: 7, len: 3 }.into();
        assert_eq!(err.exit_code(), exit_codes::USAGE_ERROR);
        assert_eq!(err.to_string(), "Invalid move: index 7 is out of range for 3 columns");
    }

    #[test]
    fn config_errors_exit_with_one() {
        let err: CliError = ConfigError::Validation("board has no columns".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);
    }

    #[test]
    fn script_line_is_attached_once() {
        let err = CliError::ColumnNotFound("asana".to_string()).at_line(3);
        assert_eq!(err.to_string(), "Script error on line 3: Column not found: asana");
        let err = err.at_line(9);
        assert!(matches!(err, CliError::Script { line: 3, .. }));
    }
}
