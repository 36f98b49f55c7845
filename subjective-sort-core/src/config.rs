//! Repositioning configuration.
//!
//! Stored as TOML alongside the rest of an application's settings:
//!
//! ```toml
//! peer_validation = "strict"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How much to trust the positions peers arrive with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerValidation {
    /// Accept gaps and duplicates and normalize them away.
    #[default]
    Permissive,
    /// Reject peer sets whose positions are not exactly `1..=k`.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositionConfig {
    pub peer_validation: PeerValidation,
}

impl RepositionConfig {
    pub fn strict() -> Self {
        Self { peer_validation: PeerValidation::Strict }
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
