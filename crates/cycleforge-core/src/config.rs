//! Run configuration and validation.
//!
//! All external inputs (bracket choice, energy cap, strategy) are
//! validated here before the planner runs; the engine itself never sees
//! an invalid configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalogue;

/// Lowest accepted per-player energy cap.
pub const MIN_ENERGY_CAP: u32 = 1;
/// Highest accepted per-player energy cap.
pub const MAX_ENERGY_CAP: u32 = 50;

/// Which allocation strategy fills the roster after pinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exact search over role-count compositions, then greedy fill.
    #[default]
    Composition,
    /// Single-pass value-density ranking.
    Greedy,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Composition => "composition",
            Strategy::Greedy => "greedy",
        }
    }

    pub fn parse(s: &str) -> Option<Strategy> {
        match s {
            "composition" => Some(Strategy::Composition),
            "greedy" => Some(Strategy::Greedy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors from validating a plan configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown bracket: {0}")]
    UnknownBracket(String),

    #[error("energy cap must be between {MIN_ENERGY_CAP} and {MAX_ENERGY_CAP}, got {0}")]
    EnergyCapOutOfRange(u32),

    #[error("unknown strategy: {0} (expected \"composition\" or \"greedy\")")]
    UnknownStrategy(String),
}

/// Configuration for one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub bracket: String,
    pub energy_cap: u32,
    #[serde(default)]
    pub strategy: Strategy,
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            bracket: "13".to_string(),
            energy_cap: 21,
            strategy: Strategy::default(),
        }
    }
}

impl PlanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if catalogue::bracket(&self.bracket).is_none() {
            return Err(ConfigError::UnknownBracket(self.bracket.clone()));
        }
        if !(MIN_ENERGY_CAP..=MAX_ENERGY_CAP).contains(&self.energy_cap) {
            return Err(ConfigError::EnergyCapOutOfRange(self.energy_cap));
        }
        Ok(())
    }
}
