//! Structured logging setup
//!
//! Installs a `tracing-subscriber` formatter filtered to the colboard crates.
//! Mounting, drop handling, reorder commits and effect dispatch run inside
//! spans named by [`span_names`].

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TracingError {
    /// The filter directives did not parse
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    /// `init_tracing` was already called in this process
    #[error("tracing has already been initialized")]
    AlreadyInitialized,

    /// The log file could not be created
    #[error("cannot create log file {}: {message}", path.display())]
    LogFile {
        /// Requested log file
        path: PathBuf,
        /// Underlying IO error
        message: String,
    },

    /// Another global subscriber is already installed
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Result type for tracing setup
pub type TracingResult<T> = Result<T, TracingError>;

/// Minimum level logged for the colboard crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Board lifecycle and committed moves
    Info,
    /// Drop classification and effect dispatch
    Debug,
    /// Registry traffic
    Trace,
}

impl TracingLevel {
    /// Maps a `-v` count to a level: none is warn, then info, debug, trace.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Filter directive for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Where formatted log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard error, with ANSI colours
    #[default]
    Stderr,
    /// A file, truncated on startup and written without colours
    File {
        /// Path to the log file
        path: PathBuf,
    },
}

/// Subscriber configuration
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Level applied to the colboard crates
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// `EnvFilter` directives that replace the level when set
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration logging warnings to stderr
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Sets custom filter directives
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn env_filter(&self) -> TracingResult<EnvFilter> {
        let directives = self.filter.clone().unwrap_or_else(|| {
            let level = self.level.as_str();
            format!("colboard_core={level},colboard_cli={level}")
        });
        EnvFilter::try_new(&directives)
            .map_err(|e| TracingError::InvalidFilter(e.to_string()))
    }

    /// Opens the output. The flag says whether ANSI colours are wanted.
    fn writer(&self) -> TracingResult<(BoxMakeWriter, bool)> {
        match &self.output {
            TracingOutput::Stderr => Ok((BoxMakeWriter::new(std::io::stderr), true)),
            TracingOutput::File { path } => {
                let file = File::create(path).map_err(|e| TracingError::LogFile {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                Ok((BoxMakeWriter::new(Mutex::new(file)), false))
            }
        }
    }
}

/// Installs the global subscriber.
///
/// Call once at startup. The filter and output are checked before anything
/// is installed, so a bad filter or unwritable log file leaves the process
/// free to retry with another configuration.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be
/// created, or a subscriber is already installed.
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.load(Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }
    let filter = config.env_filter()?;
    let (writer, ansi) = config.writer()?;

    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| TracingError::Install(e.to_string()))?;

    tracing::info!(level = config.level.as_str(), output = ?config.output, "Tracing initialized");
    Ok(())
}

/// Opens an info-level span for a board operation.
///
/// ```ignore
/// let _span = trace_operation!(span_names::BOARD_REORDER, start_index, finish_index).entered();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Like `trace_operation!`, at debug level.
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}

/// Span names for board operations
pub mod span_names {
    /// Board mount
    pub const BOARD_MOUNT: &str = "board.mount";
    /// Board unmount
    pub const BOARD_UNMOUNT: &str = "board.unmount";
    /// Reorder commit
    pub const BOARD_REORDER: &str = "board.reorder";
    /// Drop notification handling
    pub const DROP_HANDLE: &str = "drop.handle";
    /// Post-move effects
    pub const EFFECTS_DISPATCH: &str = "effects.dispatch";
    /// Board file loading
    pub const CONFIG_LOAD: &str = "config.load";
}
