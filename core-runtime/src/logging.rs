//! # Logging & Tracing Infrastructure
//!
//! Structured logging for the onboarding binary, built on `tracing`:
//! - pretty, compact or JSON lines
//! - workspace crates at the requested level, dependencies at `warn`
//! - ANSI colors only when stderr can show them
//!
//! Log output always goes to stderr so command output on stdout (option
//! lists, JSON) stays machine-readable.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::logging::{init_logging, LoggingConfig};
//!
//! let config = LoggingConfig::from_names("debug", Some("compact"))?;
//! init_logging(config)?;
//! tracing::info!("Onboarding started");
//! ```

use crate::error::{Error, Result};

use bridge_traits::theme::wants_color;
use bridge_traits::time::LogLevel;

use std::io::{self, IsTerminal};

use tracing_subscriber::{
    filter::EnvFilter, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
    Registry,
};

/// Crates whose events pass the default filter at the configured level.
const WORKSPACE_TARGETS: &[&str] = &[
    "onboard",
    "core_runtime",
    "core_auth",
    "core_models",
    "bridge_desktop",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, human-oriented
    Pretty,
    /// One JSON object per event
    Json,
    /// Single-line
    Compact,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Compact;
    }
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Level applied to the workspace crates
    pub level: LogLevel,
    /// Full `EnvFilter` directive string, replacing the per-crate default
    pub filter: Option<String>,
    pub display_target: bool,
    /// Emit ANSI colors in pretty and compact lines
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: LogLevel::Warn,
            filter: None,
            display_target: true,
            ansi: wants_color(|key| std::env::var(key).ok(), io::stderr().is_terminal()),
        }
    }
}

impl LoggingConfig {
    /// Build a configuration from textual level and format names.
    ///
    /// `format` falls back to the build default when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logging`] naming the rejected value.
    pub fn from_names(level: &str, format: Option<&str>) -> Result<Self> {
        let level = LogLevel::parse(level)
            .ok_or_else(|| Error::Logging(format!("unknown log level '{}'", level)))?;

        let mut config = Self::default().with_level(level);
        if let Some(name) = format {
            let format = LogFormat::parse(name)
                .ok_or_else(|| Error::Logging(format!("unknown log format '{}'", name)))?;
            config = config.with_format(format);
        }
        Ok(config)
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the default per-crate directives, e.g. `"core_models=trace"`
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_target(mut self, display: bool) -> Self {
        self.display_target = display;
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}

/// Install the global subscriber.
///
/// Call once during startup. A second call fails because a global subscriber
/// is already installed.
///
/// # Errors
///
/// Returns [`Error::Logging`] if the filter is invalid or a subscriber is
/// already set.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(filtered_layer(&config, io::stderr)?)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Formatting layer for `config` writing to `writer`, behind its filter.
fn filtered_layer<W>(
    config: &LoggingConfig,
    writer: W,
) -> Result<Box<dyn Layer<Registry> + Send + Sync>>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = build_filter(config)?;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(config.display_target);

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Pretty => layer.pretty().with_ansi(config.ansi).boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
        LogFormat::Compact => layer.compact().with_ansi(config.ansi).boxed(),
    };
    Ok(layer.with_filter(filter).boxed())
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = match &config.filter {
        Some(custom) => custom.clone(),
        None => std::iter::once("warn".to_string())
            .chain(
                WORKSPACE_TARGETS
                    .iter()
                    .map(|target| format!("{}={}", target, config.level.as_str())),
            )
            .collect::<Vec<_>>()
            .join(","),
    };

    EnvFilter::try_new(&directives)
        .map_err(|e| Error::Logging(format!("invalid filter '{}': {}", directives, e)))
}

/// Strip full file paths to basename only
///
/// ```ignore
/// use core_runtime::logging::strip_path;
///
/// let path = "/home/me/project/node_modules/pkg/dist/models.generated.js";
/// tracing::info!(file = %strip_path(path), "Patched");
/// // Logs: file="models.generated.js"
/// ```
pub fn strip_path(path: &str) -> &str {
    path.rsplit(&['/', '\\'][..]).next().unwrap_or(path)
}
