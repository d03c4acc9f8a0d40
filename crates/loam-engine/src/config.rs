//! Simulation configuration and validation.

use loam_core::StateCode;
use loam_grid::{EdgeRule, TopologyKind};
use loam_rule::RuleSet;

use crate::error::ConfigError;

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
///
/// Pairs a lattice shape with a population distribution and a seed.
/// Validation happens against the rule set the simulation will run,
/// since only the rule set knows which state codes exist.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Lattice adjacency backend.
    pub topology: TopologyKind,
    /// Boundary behaviour.
    pub edge: EdgeRule,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Initial population distribution: each state paired with its
    /// probability as a fraction. Order follows the rule set's state
    /// enumeration.
    pub weights: Vec<(StateCode, f64)>,
    /// RNG seed; two simulations built from the same config produce
    /// identical histories.
    pub seed: u64,
}

impl SimConfig {
    /// Validate this configuration against the rule set it will drive.
    ///
    /// Checks structural invariants only; lattice construction applies
    /// its own dimension limits afterwards.
    pub fn validate(&self, rules: &dyn RuleSet) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "rows",
                value: self.rows,
            });
        }
        if self.cols == 0 {
            return Err(ConfigError::InvalidDimension {
                name: "cols",
                value: self.cols,
            });
        }

        let states = rules.states();
        if self.weights.is_empty() {
            return Err(ConfigError::InvalidDistribution {
                reason: "empty weight list".into(),
            });
        }
        if self.weights.len() != states.len() {
            return Err(ConfigError::InvalidDistribution {
                reason: format!(
                    "{} weights for {} states",
                    self.weights.len(),
                    states.len()
                ),
            });
        }
        for &(code, weight) in &self.weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::InvalidDistribution {
                    reason: format!("weight for state {code} must be in [0, 1], got {weight}"),
                });
            }
            if !states.contains(&code) {
                return Err(ConfigError::UnknownState {
                    code,
                    rule: rules.name().to_string(),
                });
            }
        }
        Ok(())
    }
}
