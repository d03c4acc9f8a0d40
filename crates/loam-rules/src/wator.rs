//! Predator-prey ecology (Wa-Tor style).
//!
//! Each generation runs in a fixed phase order: age, classify, sharks
//! eat, survivors move, survivors breed. Later phases may overwrite an
//! earlier phase's staged write to the same destination cell —
//! last-writer-wins by phase order. That is a known source of animal
//! loss under contention, kept deliberately: the order is deterministic
//! and documented, not silently "fixed".
//!
//! Turn counters live in an engine-owned map keyed by coordinate: "the
//! animal currently in this cell", not a particular object. Entries are
//! created on birth, removed on death, and re-keyed on movement, in the
//! same transaction as the staged writes they describe.

use indexmap::{IndexMap, IndexSet};
use loam_core::{Coord, StateCode};
use loam_grid::{Lattice, Neighbourhood, PendingSeed};
use loam_rule::{RuleError, RuleSet, StepContext};
use rand::seq::IndexedRandom;

/// Open water.
pub const EMPTY: StateCode = StateCode(0);
/// Prey: moves into empty water, breeds, gets eaten.
pub const FISH: StateCode = StateCode(1);
/// Predator: eats adjacent fish, otherwise moves like prey.
pub const SHARK: StateCode = StateCode(2);

const STATES: [StateCode; 3] = [EMPTY, FISH, SHARK];

/// The predator-prey automaton.
#[derive(Debug)]
pub struct WatorRule {
    turns_to_breed: i32,
    /// Turns survived since birth or last breeding, per occupied cell.
    turns: IndexMap<Coord, i32>,
}

impl WatorRule {
    /// Create a predator-prey rule breeding after `turns_to_breed`
    /// survived turns.
    pub fn new(turns_to_breed: u32) -> Self {
        Self {
            turns_to_breed: turns_to_breed as i32,
            turns: IndexMap::new(),
        }
    }

    /// The turn counter currently tracked for a cell, if any.
    /// Exposed for tests and diagnostics.
    pub fn turns_survived(&self, coord: Coord) -> Option<i32> {
        self.turns.get(&coord).copied()
    }

    /// Number of tracked animals.
    pub fn tracked(&self) -> usize {
        self.turns.len()
    }

    fn empty_cardinals(lattice: &Lattice, coord: Coord) -> Vec<Coord> {
        lattice
            .neighbours(coord, Neighbourhood::Cardinal)
            .iter()
            .filter(|&&nb| lattice.state(nb) == EMPTY)
            .copied()
            .collect()
    }
}

impl RuleSet for WatorRule {
    fn name(&self) -> &str {
        "predator_prey"
    }

    fn states(&self) -> &'static [StateCode] {
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        // Cells no phase touches stay empty.
        PendingSeed::Fill(EMPTY)
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let (lattice, rng) = ctx.parts();

        // Population happens outside the rule set: adopt animals that
        // arrived without a counter and drop entries for cells that no
        // longer hold one.
        self.turns
            .retain(|&coord, _| lattice.state(coord) != EMPTY);
        for coord in lattice.coords() {
            if lattice.state(coord) != EMPTY {
                self.turns.entry(coord).or_insert(-1);
            }
        }

        // Phase 0: every tracked animal ages one turn. Offspring seeded
        // at -1 reach 0 here, so their first full turn counts as turn 0.
        for counter in self.turns.values_mut() {
            *counter += 1;
        }

        // Phase 1: classify. Fish as an ordered set so eating can
        // remove them from the move list; sharks as a queue.
        let mut fish: IndexSet<Coord> = IndexSet::new();
        let mut sharks: Vec<Coord> = Vec::new();
        for coord in lattice.coords() {
            match lattice.state(coord) {
                FISH => {
                    fish.insert(coord);
                }
                SHARK => sharks.push(coord),
                _ => {}
            }
        }

        // Phase 2: each shark eats a uniformly random adjacent fish
        // that is still uneaten, or queues itself to move.
        let mut survivors: Vec<(Coord, StateCode)> = Vec::new();
        let mut shark_movers: Vec<Coord> = Vec::new();
        for &shark in &sharks {
            let prey: Vec<Coord> = lattice
                .neighbours(shark, Neighbourhood::Cardinal)
                .iter()
                .filter(|nb| fish.contains(*nb))
                .copied()
                .collect();
            if let Some(&victim) = prey.choose(rng) {
                fish.shift_remove(&victim);
                self.turns.shift_remove(&victim);
                lattice.set_pending(shark, SHARK);
                survivors.push((shark, SHARK));
            } else {
                shark_movers.push(shark);
            }
        }

        // Phase 3: movers — surviving fish first, then hungry sharks —
        // each pick a uniformly random empty cardinal neighbour, or
        // stay put. "Empty" is judged against the current generation,
        // so two movers can claim one destination; the later write wins
        // and the earlier animal is lost with its counter.
        let movers: Vec<(Coord, StateCode)> = fish
            .iter()
            .map(|&c| (c, FISH))
            .chain(shark_movers.iter().map(|&c| (c, SHARK)))
            .collect();
        for (coord, species) in movers {
            let dest = match Self::empty_cardinals(lattice, coord).choose(rng) {
                Some(&dest) => {
                    if let Some(counter) = self.turns.shift_remove(&coord) {
                        self.turns.insert(dest, counter);
                    }
                    dest
                }
                None => coord,
            };
            lattice.set_pending(dest, species);
            survivors.push((dest, species));
        }

        // Phase 4: every surviving animal that has lived long enough
        // and has an empty cardinal neighbour breeds a copy into a
        // uniformly random one, resetting its own counter.
        for &(coord, species) in &survivors {
            let Some(&counter) = self.turns.get(&coord) else {
                // Lost to a same-destination overwrite above.
                continue;
            };
            if counter < self.turns_to_breed {
                continue;
            }
            if let Some(&nest) = Self::empty_cardinals(lattice, coord).choose(rng) {
                lattice.set_pending(nest, species);
                self.turns.insert(nest, -1);
                self.turns.insert(coord, 0);
            }
        }

        Ok(())
    }
}
