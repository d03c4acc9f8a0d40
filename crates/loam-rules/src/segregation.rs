//! Schelling-style segregation dynamics.
//!
//! Agents of two groups stay where they are while enough of their
//! occupied neighbours look like them, and relocate to a random empty
//! cell otherwise. Every agent is written exactly once per step, so
//! occupancy is conserved exactly.

use loam_core::{Coord, StateCode};
use loam_grid::{Neighbourhood, PendingSeed};
use loam_rule::{RuleError, RuleSet, StepContext};
use rand::seq::SliceRandom;

/// An unoccupied cell.
pub const EMPTY: StateCode = StateCode(0);
/// An agent of the first group.
pub const GROUP_A: StateCode = StateCode(1);
/// An agent of the second group.
pub const GROUP_B: StateCode = StateCode(2);

const STATES: [StateCode; 3] = [EMPTY, GROUP_A, GROUP_B];

/// The segregation automaton.
#[derive(Debug)]
pub struct SegregationRule {
    min_satisfaction: f64,
}

impl SegregationRule {
    /// Create a segregation rule with the given satisfaction threshold,
    /// a fraction of occupied neighbours in `[0, 1]`.
    pub fn new(min_satisfaction: f64) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&min_satisfaction) || min_satisfaction.is_nan() {
            return Err(format!(
                "min_satisfaction must be a fraction in [0, 1], got {min_satisfaction}"
            ));
        }
        Ok(Self { min_satisfaction })
    }

    /// The configured satisfaction threshold.
    pub fn min_satisfaction(&self) -> f64 {
        self.min_satisfaction
    }
}

impl RuleSet for SegregationRule {
    fn name(&self) -> &str {
        "segregation"
    }

    fn states(&self) -> &'static [StateCode] {
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        // Vacated cells fall back to empty; only agents are staged.
        PendingSeed::Fill(EMPTY)
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let (lattice, rng) = ctx.parts();

        // Satisfaction only counts occupied neighbours. An agent with
        // no occupied neighbours at all is satisfied by definition.
        let mut unhappy: Vec<(Coord, StateCode)> = Vec::new();
        let mut empties: Vec<Coord> = Vec::new();
        for coord in lattice.coords() {
            let me = lattice.state(coord);
            if me == EMPTY {
                empties.push(coord);
                continue;
            }
            let mut occupied = 0usize;
            let mut similar = 0usize;
            for &nb in lattice.neighbours(coord, Neighbourhood::Full).iter() {
                let other = lattice.state(nb);
                if other == EMPTY {
                    continue;
                }
                occupied += 1;
                if other == me {
                    similar += 1;
                }
            }
            let satisfied =
                occupied == 0 || similar as f64 / occupied as f64 >= self.min_satisfaction;
            if satisfied {
                lattice.set_pending(coord, me);
            } else {
                unhappy.push((coord, me));
            }
        }

        // One shuffled pool of vacancies for the whole step, consumed
        // one per relocating agent in canonical order. Agents left
        // without a vacancy stay put. Vacated cells do not re-enter the
        // pool this step, so no two agents land on the same cell.
        empties.shuffle(rng);
        let mut pool = empties.into_iter();
        for (coord, me) in unhappy {
            match pool.next() {
                Some(dest) => lattice.set_pending(dest, me),
                None => lattice.set_pending(coord, me),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_core::Generation;
    use loam_grid::Lattice;
    use loam_test_utils::{fill, rng, square_lattice_with};

    fn step_once(rule: &mut SegregationRule, lattice: &mut Lattice, seed: u64) {
        let mut stream = rng(seed);
        lattice.begin_step(rule.pending_seed());
        let mut ctx = StepContext::new(lattice, &mut stream, Generation(1));
        rule.step(&mut ctx).unwrap();
        lattice.commit();
    }

    fn census(lattice: &Lattice) -> (usize, usize) {
        (lattice.count(GROUP_A), lattice.count(GROUP_B))
    }

    #[test]
    fn isolated_agent_is_satisfied() {
        let mut rule = SegregationRule::new(1.0).unwrap();
        let mut lattice = square_lattice_with(3, &[(1, 1, GROUP_A)]);
        step_once(&mut rule, &mut lattice, 0);
        assert_eq!(lattice.state(loam_core::Coord::new(1, 1)), GROUP_A);
    }

    #[test]
    fn agent_among_its_own_stays() {
        let mut rule = SegregationRule::new(0.5).unwrap();
        let mut lattice = square_lattice_with(3, &[]);
        fill(&mut lattice, GROUP_A);
        let before = lattice.snapshot();
        step_once(&mut rule, &mut lattice, 3);
        assert_eq!(lattice.snapshot(), before);
    }

    #[test]
    fn unhappy_agent_relocates_to_an_empty_cell() {
        // One A surrounded by Bs: 0/4 similar, threshold 0.3, so it
        // moves somewhere empty; the Bs (each sees the other Bs) stay.
        let mut rule = SegregationRule::new(0.3).unwrap();
        let mut lattice = square_lattice_with(
            4,
            &[
                (1, 1, GROUP_A),
                (0, 0, GROUP_B),
                (1, 0, GROUP_B),
                (2, 0, GROUP_B),
                (0, 1, GROUP_B),
                (2, 1, GROUP_B),
                (0, 2, GROUP_B),
                (1, 2, GROUP_B),
                (2, 2, GROUP_B),
            ],
        );
        step_once(&mut rule, &mut lattice, 7);
        assert_eq!(census(&lattice), (1, 8));
        assert_eq!(lattice.state(loam_core::Coord::new(1, 1)), EMPTY);
    }

    #[test]
    fn occupancy_is_conserved() {
        let mut rule = SegregationRule::new(0.6).unwrap();
        let mut lattice = square_lattice_with(
            6,
            &[
                (0, 0, GROUP_A),
                (1, 0, GROUP_B),
                (2, 0, GROUP_A),
                (3, 0, GROUP_B),
                (0, 1, GROUP_B),
                (1, 1, GROUP_A),
                (2, 1, GROUP_B),
                (3, 1, GROUP_A),
            ],
        );
        let before = census(&lattice);
        for seed in 0..10u64 {
            step_once(&mut rule, &mut lattice, seed);
            assert_eq!(census(&lattice), before);
        }
    }

    #[test]
    fn no_vacancy_means_stay_put() {
        // Checkerboard with zero empties and a threshold nothing meets:
        // every agent is unhappy but the pool is dry, so the grid is a
        // fixed point.
        let mut lattice = square_lattice_with(4, &[]);
        for coord in lattice.coords() {
            let group = if (coord.col + coord.row) % 2 == 0 {
                GROUP_A
            } else {
                GROUP_B
            };
            lattice.set_state(coord, group);
        }
        let before = lattice.snapshot();
        let mut rule = SegregationRule::new(1.0).unwrap();
        step_once(&mut rule, &mut lattice, 11);
        assert_eq!(lattice.snapshot(), before);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(SegregationRule::new(-0.01).is_err());
        assert!(SegregationRule::new(1.01).is_err());
        assert!(SegregationRule::new(f64::NAN).is_err());
    }

    mod properties {
        use super::*;
        use loam_test_utils::square_lattice;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            // Relocation only shuffles agents between cells, so both
            // group populations are invariant for any threshold, any
            // starting mix, and any seed.
            #[test]
            fn occupancy_conserved(threshold in 0.0f64..=1.0, seed in 0u64..500) {
                let mut rule = SegregationRule::new(threshold).unwrap();
                let mut lattice = square_lattice(6);
                lattice
                    .populate(
                        &[(EMPTY, 0.4), (GROUP_A, 0.3), (GROUP_B, 0.3)],
                        &mut rng(seed),
                    )
                    .unwrap();
                let before = census(&lattice);
                for step_seed in 0..3u64 {
                    step_once(&mut rule, &mut lattice, seed ^ step_seed);
                    prop_assert_eq!(census(&lattice), before);
                }
            }
        }
    }
}
