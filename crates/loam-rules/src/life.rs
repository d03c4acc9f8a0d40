//! Life-like boolean automaton.
//!
//! Survival thresholds are the classical 2–3, but birth requires
//! *more than* three live neighbours — the reference behaviour this
//! engine reproduces exactly, not Conway's B3.

use loam_core::StateCode;
use loam_grid::{Neighbourhood, PendingSeed};
use loam_rule::{RuleError, RuleSet, StepContext};

/// A dead cell.
pub const DEAD: StateCode = StateCode(0);
/// A live cell.
pub const ALIVE: StateCode = StateCode(1);

const STATES: [StateCode; 2] = [DEAD, ALIVE];

/// The life-like automaton. Deterministic; consumes no randomness.
#[derive(Debug, Default)]
pub struct LifeRule;

impl LifeRule {
    /// Create the life rule.
    pub fn new() -> Self {
        Self
    }
}

impl RuleSet for LifeRule {
    fn name(&self) -> &str {
        "game_of_life"
    }

    fn states(&self) -> &'static [StateCode] {
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let lattice = ctx.lattice();
        for coord in lattice.coords() {
            let live = lattice
                .neighbours(coord, Neighbourhood::Full)
                .iter()
                .filter(|&&nb| lattice.state(nb) == ALIVE)
                .count();
            let next = if lattice.state(coord) == ALIVE {
                if (2..=3).contains(&live) {
                    ALIVE
                } else {
                    DEAD
                }
            } else if live > 3 {
                ALIVE
            } else {
                DEAD
            };
            lattice.set_pending(coord, next);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_core::{Coord, Generation};
    use loam_test_utils::{rng, square_lattice_with};

    fn step_once(lattice: &mut loam_grid::Lattice) {
        let mut rule = LifeRule::new();
        let mut stream = rng(0);
        lattice.begin_step(rule.pending_seed());
        let mut ctx = StepContext::new(lattice, &mut stream, Generation(1));
        rule.step(&mut ctx).unwrap();
        lattice.commit();
    }

    #[test]
    fn isolated_cell_dies() {
        let mut lattice = square_lattice_with(3, &[(1, 1, ALIVE)]);
        step_once(&mut lattice);
        assert_eq!(lattice.state(Coord::new(1, 1)), DEAD);
    }

    #[test]
    fn cell_with_two_neighbours_survives() {
        let mut lattice =
            square_lattice_with(3, &[(0, 1, ALIVE), (1, 1, ALIVE), (2, 1, ALIVE)]);
        step_once(&mut lattice);
        assert_eq!(lattice.state(Coord::new(1, 1)), ALIVE);
    }

    #[test]
    fn overcrowded_cell_dies() {
        let mut lattice = square_lattice_with(
            3,
            &[
                (1, 1, ALIVE),
                (0, 0, ALIVE),
                (1, 0, ALIVE),
                (2, 0, ALIVE),
                (0, 1, ALIVE),
            ],
        );
        step_once(&mut lattice);
        assert_eq!(lattice.state(Coord::new(1, 1)), DEAD);
    }

    #[test]
    fn dead_cell_with_exactly_three_stays_dead() {
        // The reference birth threshold is strictly more than three.
        let mut lattice =
            square_lattice_with(3, &[(0, 0, ALIVE), (1, 0, ALIVE), (2, 0, ALIVE)]);
        step_once(&mut lattice);
        assert_eq!(lattice.state(Coord::new(1, 1)), DEAD);
    }

    #[test]
    fn dead_cell_with_four_is_born() {
        let mut lattice = square_lattice_with(
            3,
            &[(0, 0, ALIVE), (1, 0, ALIVE), (2, 0, ALIVE), (0, 1, ALIVE)],
        );
        step_once(&mut lattice);
        assert_eq!(lattice.state(Coord::new(1, 1)), ALIVE);
    }
}
