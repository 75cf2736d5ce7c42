use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{DEFAULT_BEAMWIDTH_DEG, DEFAULT_MAX_NEIGHBORS};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub runtime: RuntimeSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Total acceptance cone width centered on each cell's azimuth
    #[serde(default = "default_beamwidth_deg")]
    pub beamwidth_deg: f64,
    /// Cap on neighbors kept per source cell
    #[serde(default = "default_max_neighbors")]
    pub max_neighbors: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            beamwidth_deg: default_beamwidth_deg(),
            max_neighbors: default_max_neighbors(),
        }
    }
}

fn default_beamwidth_deg() -> f64 {
    DEFAULT_BEAMWIDTH_DEG
}

fn default_max_neighbors() -> usize {
    DEFAULT_MAX_NEIGHBORS
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeSettings {
    /// Worker thread count; unset means half the available cores
    pub workers: Option<usize>,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CELLMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CELLMATCH_)
            // e.g., CELLMATCH_MATCHING__BEAMWIDTH_DEG -> matching.beamwidth_deg
            .add_source(
                Environment::with_prefix("CELLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CELLMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
