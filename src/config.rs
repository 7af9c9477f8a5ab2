use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{validate_dimensions, DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_LENGTH};

/// Board geometry and the run length needed to win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

/// Display colors for the two seats. Any string the front end understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_color: String,
    pub second_color: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_color: "red".to_string(),
            second_color: "yellow".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height == 0 {
            return Err(ConfigError::Validation(
                "board.height must be >= 1".into(),
            ));
        }
        if self.board.width == 0 {
            return Err(ConfigError::Validation(
                "board.width must be >= 1".into(),
            ));
        }
        validate_dimensions(self.board.height, self.board.width, self.board.win_length)
            .map_err(|e| ConfigError::Validation(format!("board: {e}")))?;

        if self.players.first_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first_color must not be empty".into(),
            ));
        }
        if self.players.second_color.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second_color must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
