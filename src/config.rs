//! Engine and pacing configuration.

use crate::games::tictactoe::{MAX_USEFUL_DEPTH, Minimax, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for the automated opponent and the play loop.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Plies searched below each candidate move.
    #[serde(default = "default_search_depth")]
    search_depth: u32,

    /// Mark played by the engine. The human plays the other one.
    #[serde(default = "default_automated_mark")]
    automated_mark: Player,

    /// Pause before the engine's reply is shown, in milliseconds.
    #[serde(default = "default_delay_ms")]
    move_delay_ms: u64,

    /// Pause before the result banner is shown, in milliseconds.
    #[serde(default = "default_delay_ms")]
    result_delay_ms: u64,
}

fn default_search_depth() -> u32 {
    2
}

fn default_automated_mark() -> Player {
    Player::O
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: default_search_depth(),
            automated_mark: default_automated_mark(),
            move_delay_ms: default_delay_ms(),
            result_delay_ms: default_delay_ms(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            depth = config.search_depth,
            mark = %config.automated_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the search depth.
    pub fn with_search_depth(mut self, depth: u32) -> Result<Self, ConfigError> {
        self.search_depth = depth;
        self.validate()?;
        Ok(self)
    }

    /// Overrides the engine's mark.
    pub fn with_automated_mark(mut self, mark: Player) -> Self {
        self.automated_mark = mark;
        self
    }

    /// Overrides both pacing delays.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.move_delay_ms = delay_ms;
        self.result_delay_ms = delay_ms;
        self
    }

    /// Builds the search described by this config.
    pub fn engine(&self) -> Minimax {
        Minimax::new(self.automated_mark, self.search_depth)
    }

    /// Pause before the engine's reply.
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    /// Pause before the result banner.
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth > MAX_USEFUL_DEPTH {
            return Err(ConfigError::new(format!(
                "search_depth {} exceeds {}",
                self.search_depth, MAX_USEFUL_DEPTH
            )));
        }
        Ok(())
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
