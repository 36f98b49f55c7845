use crate::domain::Position;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assigning positions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositionError {
    #[error("Position must be at least one, got {0}")]
    InvalidPosition(i64),

    #[error("Index {index} out of bounds for collection of {len} items")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Position {0} is held by more than one peer")]
    DuplicatePosition(Position),

    #[error("Positions are not dense: expected {expected}, found {found}")]
    PositionGap { expected: Position, found: Position },
}

/// Errors raised while loading or writing a [`RepositionConfig`](crate::config::RepositionConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
