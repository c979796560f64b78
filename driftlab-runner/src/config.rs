//! TOML run configuration.
//!
//! A [`RunConfig`] describes one full experiment: the base strategy
//! parameters, an optional sweep grid, and an optional Monte Carlo
//! section. Its `run_id` is the blake3 hash of the canonical JSON
//! encoding, so runs with identical configuration share an id and any
//! parameter change produces a new one.

use serde::{Deserialize, Serialize};

use driftlab_core::StrategyParams;

use crate::sweep::ParamGrid;

/// Monte Carlo section of a run configuration. Capital is taken from the
/// strategy section, not repeated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McSpec {
    pub n_trials: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub strategy: StrategyParams,
    #[serde(default)]
    pub grid: Option<ParamGrid>,
    #[serde(default)]
    pub monte_carlo: Option<McSpec>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyParams::default(),
            grid: None,
            monte_carlo: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse run config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] driftlab_core::Error),
}

impl RunConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(raw)?;
        config.strategy.validate()?;
        Ok(config)
    }

    /// Stable content hash of this configuration.
    pub fn run_id(&self) -> String {
        let canonical =
            serde_json::to_vec(self).expect("run config serialization cannot fail");
        blake3::hash(&canonical).to_hex().to_string()
    }
}
