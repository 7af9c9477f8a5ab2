use std::path::PathBuf;

/// Errors raised when constructing a player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("players must provide colors")]
    MissingColor,
}

/// Errors raised when creating a game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("board must have between 1 and {max} cells (got {height}x{width})", max = crate::game::MAX_CELLS)]
    InvalidDimensions { height: usize, width: usize },

    #[error("win length {win_length} cannot be reached on a {height}x{width} board")]
    InvalidWinLength {
        win_length: usize,
        height: usize,
        width: usize,
    },

    #[error(transparent)]
    Player(#[from] PlayerError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
