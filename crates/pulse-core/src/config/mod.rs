//! Workspace configuration.
//!
//! Defaults come from [`crate::constants`]; every section is
//! serde-deserializable with `#[serde(default)]` so partial TOML files and
//! older persisted configs keep working. Backend selection additionally
//! resolves from process environment at construction time.

mod clustering_config;
mod generation_config;

pub use clustering_config::ClusteringConfig;
pub use generation_config::{GenerationConfig, ENDPOINT_ENV, TOKEN_ENV};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level Pulse configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub clustering: ClusteringConfig,
    pub generation: GenerationConfig,
}

impl PulseConfig {
    /// Defaults plus environment-driven generation backend selection.
    pub fn from_env() -> Self {
        Self {
            clustering: ClusteringConfig::default(),
            generation: GenerationConfig::from_env(),
        }
    }

    /// Load from a TOML file. Missing sections fall back to defaults.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })
    }
}
