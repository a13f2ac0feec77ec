//! Run configuration
//!
//! Report toggles and pseudo-random generator bounds. Values are read once at
//! startup (CLI flags, optionally layered over a TOML file) and stay fixed for
//! the whole run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GalaxyError, Result};

/// Report toggles handed to the dispatcher at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    /// Emit one line per resolved battle
    pub verbose: bool,

    /// Emit per-planet median losses whenever the clock advances
    pub median: bool,

    /// Emit the per-general deployment/survival table at end of day
    pub general_eval: bool,

    /// Track and emit the most interesting ambush and attack per planet
    pub watcher: bool,
}

impl SimulationOptions {
    /// Combine two option sets; a toggle is on if either side turns it on
    pub fn merge(self, other: SimulationOptions) -> Self {
        Self {
            verbose: self.verbose || other.verbose,
            median: self.median || other.median,
            general_eval: self.general_eval || other.general_eval,
            watcher: self.watcher || other.watcher,
        }
    }
}

/// Bounds for the pseudo-random deployment producer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Largest force rating a generated deployment can carry
    ///
    /// Force ratings are drawn uniformly from `1..=max_force`.
    pub max_force: u32,

    /// Largest troop count a generated deployment can carry
    pub max_troops: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_force: 500,
            max_troops: 1000,
        }
    }
}

/// Everything that can be set from a config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    pub report: SimulationOptions,
    pub generator: GeneratorConfig,
}

impl GalaxyConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GalaxyConfig = toml::from_str(content)?;
        config.validate().map_err(GalaxyError::InvalidConfig)?;
        Ok(config)
    }

    /// Read and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded config from {:?}", path);
        Self::from_toml(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.generator.max_force == 0 {
            return Err("generator.max_force must be positive".into());
        }
        if self.generator.max_troops == 0 {
            return Err("generator.max_troops must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GalaxyConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.report, SimulationOptions::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GalaxyConfig::from_toml("[report]\nmedian = true\n").unwrap();
        assert!(config.report.median);
        assert!(!config.report.verbose);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let err = GalaxyConfig::from_toml("[generator]\nmax_force = 0\n").unwrap_err();
        assert!(matches!(err, GalaxyError::InvalidConfig(_)));
    }

    #[test]
    fn test_unparseable_toml_rejected() {
        let err = GalaxyConfig::from_toml("[report\n").unwrap_err();
        assert!(matches!(err, GalaxyError::TomlError(_)));
    }

    #[test]
    fn test_merge_is_union() {
        let file = SimulationOptions { median: true, ..Default::default() };
        let cli = SimulationOptions { verbose: true, ..Default::default() };
        let merged = file.merge(cli);
        assert!(merged.verbose && merged.median);
        assert!(!merged.general_eval && !merged.watcher);
    }
}
