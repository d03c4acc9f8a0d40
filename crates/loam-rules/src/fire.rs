//! Probabilistic forest-fire spread.
//!
//! Purely per-cell: a tree only ever consults its neighbours'
//! current-generation states, so no two cells can contend for the same
//! write and no conflict resolution is needed.

use loam_core::StateCode;
use loam_grid::{Neighbourhood, PendingSeed};
use loam_rule::{RuleError, RuleSet, StepContext};
use rand::prelude::*;

/// No tree, nothing to burn.
pub const EMPTY: StateCode = StateCode(0);
/// A live tree.
pub const TREE: StateCode = StateCode(1);
/// A tree on fire; burns out after exactly one generation.
pub const BURNING: StateCode = StateCode(2);

const STATES: [StateCode; 3] = [EMPTY, TREE, BURNING];

/// The spreading-fire automaton.
///
/// Each generation: a burning cell becomes empty; a tree with at least
/// one burning cardinal neighbour catches fire with probability
/// `prob_catch`; everything else is unchanged.
#[derive(Debug)]
pub struct FireRule {
    prob_catch: f64,
}

impl FireRule {
    /// Create a fire rule with the given catch probability.
    ///
    /// Returns `Err` if `prob_catch` is not a probability in `[0, 1]`.
    pub fn new(prob_catch: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&prob_catch) || prob_catch.is_nan() {
            return Err(format!(
                "prob_catch must be a probability in [0, 1], got {prob_catch}"
            ));
        }
        Ok(Self { prob_catch })
    }

    /// The configured catch probability.
    pub fn prob_catch(&self) -> f64 {
        self.prob_catch
    }
}

impl RuleSet for FireRule {
    fn name(&self) -> &str {
        "fire"
    }

    fn states(&self) -> &'static [StateCode] {
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let (lattice, rng) = ctx.parts();
        for coord in lattice.coords() {
            match lattice.state(coord) {
                BURNING => lattice.set_pending(coord, EMPTY),
                TREE => {
                    let threatened = lattice
                        .neighbours(coord, Neighbourhood::Cardinal)
                        .iter()
                        .any(|&nb| lattice.state(nb) == BURNING);
                    if threatened && rng.random_bool(self.prob_catch) {
                        lattice.set_pending(coord, BURNING);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}
