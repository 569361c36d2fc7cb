//! Configuration for the terminal UI.

use crate::tui::DisplayOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "timeline_tictactoe.toml";

/// Presentation and logging settings.
///
/// Every key is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial order of the move list.
    #[serde(default)]
    move_order: DisplayOrder,

    /// Whether the three winning squares are highlighted.
    #[serde(default = "default_highlight")]
    highlight_winning_line: bool,

    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_highlight() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timeline_tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            move_order: DisplayOrder::default(),
            highlight_winning_line: default_highlight(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = %config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] if it
    /// exists, otherwise the defaults.
    ///
    /// An explicitly named file must exist and parse.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the move order, e.g. from a command-line flag.
    pub fn with_move_order(mut self, order: DisplayOrder) -> Self {
        self.move_order = order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
