//! Structured logging setup for the layout engine
//!
//! The layout types log through the `tracing` facade. This module wires
//! a `tracing-subscriber` registry for applications embedding the engine,
//! and provides the span macros and span names used around construction,
//! splitting, resizing and settings I/O.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingSettings;

/// Global flag indicating whether tracing has been initialized
static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// The subscriber or filter could not be installed
    #[error("failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("tracing has already been initialized")]
    AlreadyInitialized,

    /// The log file could not be created
    #[error("failed to create log file {path}: {source}")]
    FileCreationFailed {
        /// Requested log file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Errors, warnings and info (default)
    #[default]
    Info,
    /// Everything up to debug messages
    Debug,
    /// Everything
    Trace,
}

impl std::str::FromStr for TracingLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard output
    Stdout,
    /// Standard error
    #[default]
    Stderr,
    /// A log file, truncated on start
    File(PathBuf),
}

/// Configuration for tracing initialization
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracingConfig {
    /// Log level for the `panegrid` targets
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Whether thread ids are printed
    pub thread_ids: bool,
    /// Custom `EnvFilter` directive (overrides level if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from the `[logging]` settings section.
    ///
    /// An unknown level name falls back to info.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.parse().unwrap_or_default(),
            filter: settings.filter.clone(),
            ..Self::default()
        }
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

    /// Enables or disables thread ids
    #[must_use]
    pub const fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.thread_ids = enabled;
        self
    }

    /// Sets a custom filter directive
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Debug level on stdout
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: TracingLevel::Debug,
            output: TracingOutput::Stdout,
            thread_ids: true,
            filter: None,
        }
    }

    /// Info level on stderr
    #[must_use]
    pub const fn production() -> Self {
        Self {
            level: TracingLevel::Info,
            output: TracingOutput::Stderr,
            thread_ids: false,
            filter: None,
        }
    }

    /// The filter directive this configuration installs
    #[must_use]
    pub fn directive(&self) -> String {
        self.filter
            .clone()
            .unwrap_or_else(|| format!("panegrid={}", self.level))
    }
}

/// Installs the global subscriber
///
/// Call once at startup; later calls fail. The filter and the log file
/// are checked before anything global changes.
///
/// # Errors
///
/// Returns an error if:
/// - The filter directive is invalid
/// - File output is configured but the file cannot be created
/// - Tracing has already been initialized or the subscriber fails to install
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    let filter = EnvFilter::try_new(config.directive())
        .map_err(|e| TracingError::InitializationFailed(e.to_string()))?;
    let file = match &config.output {
        TracingOutput::File(path) => Some(std::fs::File::create(path).map_err(|source| {
            TracingError::FileCreationFailed {
                path: path.clone(),
                source,
            }
        })?),
        TracingOutput::Stdout | TracingOutput::Stderr => None,
    };

    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(config.thread_ids);
    let registry = tracing_subscriber::registry().with(filter);
    let installed = match (file, &config.output) {
        (Some(file), _) => registry
            .with(layer.with_ansi(false).with_writer(file))
            .try_init(),
        (None, TracingOutput::Stdout) => {
            registry.with(layer.with_writer(std::io::stdout)).try_init()
        }
        (None, _) => registry.with(layer.with_writer(std::io::stderr)).try_init(),
    };
    installed.map_err(|e| TracingError::InitializationFailed(e.to_string()))?;

    tracing::info!(level = %config.level, "tracing initialized");
    Ok(())
}

/// Creates an info-level span for a layout operation
///
/// ```
/// use panegrid_core::trace_operation;
/// use panegrid_core::tracing::span_names;
///
/// let _span = trace_operation!(span_names::LAYOUT_SPLIT, row = 0, col = 1).entered();
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

/// Standard span names
pub mod span_names {
    /// Layout construction
    pub const LAYOUT_BUILD: &str = "layout.build";
    /// Area split
    pub const LAYOUT_SPLIT: &str = "layout.split";
    /// Whole-layout resize
    pub const LAYOUT_RESIZE: &str = "layout.resize";
    /// Settings load
    pub const CONFIG_LOAD: &str = "config.load";
    /// Settings save
    pub const CONFIG_SAVE: &str = "config.save";
}
