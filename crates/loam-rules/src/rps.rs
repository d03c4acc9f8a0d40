//! Cyclic-dominance (rock-paper-scissors) invasion.
//!
//! Three colours beat each other in a cycle and invade blank territory.
//! Every cell carries an invasion gradient: each hop into blank space
//! costs one point of strength, and once a front's gradient reaches the
//! configured maximum it can no longer expand into blanks, only fight
//! other colours. Cells are visited in a freshly shuffled order each
//! step, so no direction of the grid is systematically favoured.

use indexmap::IndexMap;
use loam_core::{Coord, StateCode};
use loam_grid::{Neighbourhood, PendingSeed};
use loam_rule::{RuleError, RuleSet, StepContext};
use rand::seq::{IndexedRandom, SliceRandom};

/// Unclaimed territory.
pub const WHITE: StateCode = StateCode(0);
/// Beats green.
pub const RED: StateCode = StateCode(1);
/// Beats blue.
pub const GREEN: StateCode = StateCode(2);
/// Beats red.
pub const BLUE: StateCode = StateCode(3);

const STATES: [StateCode; 4] = [WHITE, RED, GREEN, BLUE];

fn beats(attacker: StateCode, defender: StateCode) -> bool {
    matches!(
        (attacker, defender),
        (RED, GREEN) | (GREEN, BLUE) | (BLUE, RED)
    )
}

/// The cyclic-dominance automaton.
#[derive(Debug)]
pub struct RpsRule {
    max_gradient: u32,
    /// Invasion strength spent reaching each cell.
    gradients: IndexMap<Coord, u32>,
}

impl RpsRule {
    /// Create a cyclic-dominance rule whose fronts exhaust after
    /// `max_gradient` hops into unclaimed territory.
    pub fn new(max_gradient: u32) -> Self {
        Self {
            max_gradient,
            gradients: IndexMap::new(),
        }
    }

    /// The configured gradient ceiling.
    pub fn max_gradient(&self) -> u32 {
        self.max_gradient
    }

    /// The gradient currently tracked for a cell, if any.
    pub fn gradient(&self, coord: Coord) -> Option<u32> {
        self.gradients.get(&coord).copied()
    }
}

impl RuleSet for RpsRule {
    fn name(&self) -> &str {
        "rock_paper_scissors"
    }

    fn states(&self) -> &'static [StateCode] {
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let (lattice, rng) = ctx.parts();

        // Cells painted outside the rule set start at full strength.
        for coord in lattice.coords() {
            self.gradients.entry(coord).or_insert(0);
        }

        let mut order = lattice.coords();
        order.shuffle(rng);

        for coord in order {
            let me = lattice.state(coord);
            let neighbours = lattice.neighbours(coord, Neighbourhood::Full);
            let Some(&rival) = neighbours.choose(rng) else {
                continue;
            };
            let other = lattice.state(rival);
            if other == WHITE {
                continue;
            }
            let rival_gradient = self.gradients.get(&rival).copied().unwrap_or(0);
            if me == WHITE {
                // Expansion into blank territory costs one strength
                // and stops entirely at the ceiling.
                if rival_gradient < self.max_gradient {
                    lattice.set_pending(coord, other);
                    self.gradients.insert(coord, rival_gradient + 1);
                }
            } else if beats(other, me) {
                // Conquest: the loser's cell joins the winner's front
                // at the winner's strength, and victory refreshes the
                // winner's own cell by one point.
                lattice.set_pending(coord, other);
                self.gradients.insert(coord, rival_gradient);
                self.gradients
                    .insert(rival, rival_gradient.saturating_sub(1));
            }
        }

        Ok(())
    }

    fn rotate(
        &mut self,
        lattice: &mut loam_grid::Lattice,
        coord: Coord,
    ) -> Result<(), RuleError> {
        // Interactive toggle: cycle the cell one colour forward and
        // reset its gradient, as if it had just been painted.
        let next = match lattice.state(coord) {
            WHITE => RED,
            RED => GREEN,
            GREEN => BLUE,
            _ => RED,
        };
        lattice.set_state(coord, next);
        self.gradients.insert(coord, 0);
        Ok(())
    }
}
