use std::path::PathBuf;

/// Errors that can occur while writing the leaderboard file.
///
/// Reads never fail: an unreadable file is treated as an empty leaderboard.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write leaderboard {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode leaderboard: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("cannot record a game that is still in progress")]
    GameInProgress,

    #[error("no game id left after {0}")]
    IdsExhausted(u32),
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
