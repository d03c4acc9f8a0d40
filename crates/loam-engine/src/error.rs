//! Engine error types.

use std::error::Error;
use std::fmt;

use loam_core::StateCode;
use loam_grid::GridError;
use loam_rule::RuleError;

/// Errors detected while validating a [`SimConfig`](crate::SimConfig)
/// or constructing a [`Simulation`](crate::Simulation).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A lattice axis is zero.
    InvalidDimension {
        /// Axis name (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// The population weight list is structurally unusable.
    InvalidDistribution {
        /// What went wrong.
        reason: String,
    },
    /// A weight names a state code the rule set does not define.
    UnknownState {
        /// The unrecognised code.
        code: StateCode,
        /// The rule set that rejected it.
        rule: String,
    },
    /// Lattice construction or population failed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::InvalidDistribution { reason } => {
                write!(f, "invalid distribution: {reason}")
            }
            Self::UnknownState { code, rule } => {
                write!(f, "state {code} is not defined by rule set {rule:?}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from a manual state rotation.
#[derive(Debug, PartialEq)]
pub enum RotateError {
    /// The coordinate lies outside the lattice.
    OutOfBounds(GridError),
    /// The rule set defines no rotation, or it failed.
    Rule(RuleError),
}

impl fmt::Display for RotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(e) => write!(f, "{e}"),
            Self::Rule(e) => write!(f, "{e}"),
        }
    }
}

impl Error for RotateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            Self::Rule(e) => Some(e),
        }
    }
}

impl From<RuleError> for RotateError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}
