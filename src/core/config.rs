//! Runtime configuration
//!
//! Every field has a default, so an empty TOML file (or no file at all)
//! yields the standard behavior.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{KoverError, Result};
use crate::coverage::Boundary;

/// Settings for the coverage evaluator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageConfig {
    /// Whether a corner lying exactly on the edge of an antenna's range
    /// counts as covered (`closed`) or not (`open`)
    #[serde(default)]
    pub boundary: Boundary,
}

/// Complete configuration for a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KoverConfig {
    /// Default tracing filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub coverage: CoverageConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for KoverConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            coverage: CoverageConfig::default(),
        }
    }
}

impl KoverConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| KoverError::Config(format!("Failed to parse config TOML: {}", e)))
    }

    /// Load a configuration from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| KoverError::Config(format!("Failed to read config file {:?}: {}", path, e)))?;
        Self::from_toml_str(&content)
    }
}
