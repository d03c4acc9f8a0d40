//! Error types for lattice construction and population.

use loam_core::Coord;
use std::fmt;

/// Errors arising from lattice construction or population.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a lattice with a zero-sized axis.
    InvalidDimension {
        /// Axis name (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
    },
    /// An axis exceeds the maximum representable extent.
    DimensionTooLarge {
        /// Axis name (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// A coordinate is outside the bounds of the lattice.
    ///
    /// Used internally; neighbour lookups silently filter out-of-bounds
    /// coordinates rather than returning this.
    OutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A population weight list is unusable: empty, or its length does
    /// not match the rule set's state list.
    InvalidDistribution {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::InvalidDistribution { reason } => {
                write!(f, "invalid distribution: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}
