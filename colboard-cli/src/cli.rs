//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colboard_core::{DragKind, Edge, KeyboardMove};

use crate::session::Pointer;

/// `colboard` command-line interface for reordering board columns
#[derive(Parser)]
#[command(name = "colboard-cli")]
#[command(author, version, about = "colboard command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML board file (defaults to the built-in board)
    #[arg(short, long, global = true, env = "COLBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logs except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to FILE instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, overriding -v and -q (e.g. `colboard_core=trace`)
    #[arg(long, global = true, env = "COLBOARD_LOG", value_name = "DIRECTIVES")]
    pub log_filter: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "table", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the columns in board order
    #[command(about = "Print the columns in their current order")]
    Columns,

    /// Move a column by index, as a keyboard move
    #[command(about = "Move the column at START to FINISH (0-based)")]
    Move {
        /// Current index of the column
        start: usize,
        /// Index the column should end up at
        finish: usize,
    },

    /// Move a column from its action menu
    #[command(about = "Move a column one step or to either end")]
    Shift {
        /// Column ID
        column: String,
        /// Direction of the move
        #[arg(value_enum)]
        direction: ShiftDirection,
    },

    /// Simulate a pointer drop of one column on another
    #[command(about = "Drop SOURCE on TARGET through the board's drop monitor")]
    Drop {
        #[command(flatten)]
        args: DropArgs,
    },

    /// Run several commands against one board
    #[command(about = "Run newline-separated commands from FILE or stdin")]
    Script {
        /// Script file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Commands accepted on a script line.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
pub struct ScriptLine {
    #[command(subcommand)]
    pub command: ScriptCommand,
}

/// A single script command
#[derive(Debug, Subcommand)]
pub enum ScriptCommand {
    /// Print the columns
    Columns,
    /// Move by index
    Move {
        /// Current index
        start: usize,
        /// Target index
        finish: usize,
    },
    /// Menu move
    Shift {
        /// Column ID
        column: String,
        /// Direction
        #[arg(value_enum)]
        direction: ShiftDirection,
    },
    /// Pointer drop
    Drop {
        #[command(flatten)]
        args: DropArgs,
    },
}

/// Arguments of a simulated pointer drop
#[derive(Debug, Args)]
pub struct DropArgs {
    /// ID of the dragged column
    pub source: String,
    /// ID of the column under the pointer
    pub target: String,
    /// Closest edge of the target (neither this nor --at drops onto the
    /// target's position)
    #[arg(short, long, value_enum, conflicts_with = "at")]
    pub edge: Option<EdgeArg>,
    /// Pointer coordinate along the board; the edge is hit tested against
    /// the target's box (columns are 250 wide with a gap of 8)
    #[arg(long, value_name = "COORD", allow_negative_numbers = true)]
    pub at: Option<f64>,
    /// Drag a card out of SOURCE instead of the column itself
    #[arg(long)]
    pub card: bool,
}

impl DropArgs {
    /// Where the drag is released over the target.
    #[must_use]
    pub fn pointer(&self) -> Pointer {
        match (self.at, self.edge) {
            (Some(position), _) => Pointer::At(position),
            (None, Some(edge)) => Pointer::Near(edge.into()),
            (None, None) => Pointer::NoEdge,
        }
    }

    /// What is being dragged.
    #[must_use]
    pub const fn kind(&self) -> DragKind {
        if self.card {
            DragKind::Card
        } else {
            DragKind::Column
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Table,
    /// JSON
    Json,
}

/// Direction of a menu move
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShiftDirection {
    /// One position left
    Left,
    /// One position right
    Right,
    /// To the first position
    First,
    /// To the last position
    Last,
}

impl From<ShiftDirection> for KeyboardMove {
    fn from(direction: ShiftDirection) -> Self {
        match direction {
            ShiftDirection::Left => Self::Left,
            ShiftDirection::Right => Self::Right,
            ShiftDirection::First => Self::First,
            ShiftDirection::Last => Self::Last,
        }
    }
}

/// Closest edge of a drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    /// Left edge (before the target on a horizontal board)
    Left,
    /// Right edge (after the target on a horizontal board)
    Right,
    /// Top edge (before the target on a vertical board)
    Top,
    /// Bottom edge (after the target on a vertical board)
    Bottom,
}

impl From<EdgeArg> for Edge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Left => Self::Left,
            EdgeArg::Right => Self::Right,
            EdgeArg::Top => Self::Top,
            EdgeArg::Bottom => Self::Bottom,
        }
    }
}
