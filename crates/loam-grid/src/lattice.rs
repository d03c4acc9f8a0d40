//! Double-buffered cell storage.
//!
//! [`Lattice`] owns the cells of one simulation: an authoritative
//! `state` and a staging `pending` per cell, committed in a single pass
//! at the end of each step. Rule sets read `state` and write `pending`;
//! `pending` is deliberately unreadable outside this module so that a
//! rule can never observe a neighbour's in-step write. That
//! write-isolation is what would make per-cell computation
//! parallelisable, and it is preserved even in this single-threaded
//! design.

use crate::error::GridError;
use crate::topology::{NeighbourList, Neighbourhood, Topology};
use loam_core::{Coord, StateCode};
use rand::prelude::*;

/// One cell: authoritative state plus the staged next state.
///
/// Coordinates are implicit in the cell's position within the lattice's
/// row-major storage; per-cell bookkeeping that outlives a step is keyed
/// by [`Coord`] in the owning rule set, not stored here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Cell {
    state: StateCode,
    pending: StateCode,
}

/// How to seed every cell's `pending` before a rule set runs.
///
/// A rule set declares its seed so that cells it never touches still
/// have a fully-defined next state at commit time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingSeed {
    /// Seed `pending` from the current state: untouched cells stay as
    /// they are (Fire, Life, RockPaperScissors).
    Copy,
    /// Seed `pending` with a fixed code: untouched cells become that
    /// state (Wator and Segregation seed empty and re-write occupants).
    Fill(StateCode),
}

/// A deep, immutable copy of lattice state at a point in history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatticeSnapshot {
    rows: u32,
    cols: u32,
    states: Vec<StateCode>,
}

impl LatticeSnapshot {
    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// State at a coordinate. Panics if out of bounds; snapshots are
    /// only indexed with coordinates from the owning lattice.
    pub fn state(&self, coord: Coord) -> StateCode {
        self.states[(coord.row as usize) * (self.cols as usize) + coord.col as usize]
    }

    /// All states in row-major order, for bulk rendering.
    pub fn states(&self) -> &[StateCode] {
        &self.states
    }

    /// Count of cells holding `code`.
    pub fn count(&self, code: StateCode) -> usize {
        self.states.iter().filter(|&&s| s == code).count()
    }
}

/// The grid of one simulation: cells plus the topology that defines
/// their adjacency.
///
/// Dimensions are fixed at construction; cells are mutated in place
/// every generation. The lattice does not interpret state codes.
pub struct Lattice {
    topology: Box<dyn Topology>,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Create a lattice with every cell in state `StateCode(0)`.
    ///
    /// Dimensions come from the topology, which has already validated
    /// them at its own construction.
    pub fn new(topology: Box<dyn Topology>) -> Self {
        let cells = vec![Cell::default(); topology.cell_count()];
        Self { topology, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.topology.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.topology.cols()
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The adjacency backend.
    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    /// Whether a coordinate lies inside the lattice.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.topology.in_bounds(coord)
    }

    /// Neighbours of a cell under the lattice's topology.
    pub fn neighbours(&self, coord: Coord, scope: Neighbourhood) -> NeighbourList {
        self.topology.neighbours(coord, scope)
    }

    /// All cells in row-major canonical order.
    pub fn coords(&self) -> Vec<Coord> {
        self.topology.canonical_ordering()
    }

    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.in_bounds(coord), "coordinate {coord} out of bounds");
        (coord.row as usize) * (self.cols() as usize) + coord.col as usize
    }

    /// Authoritative state of a cell, stable between commits.
    pub fn state(&self, coord: Coord) -> StateCode {
        self.cells[self.index(coord)].state
    }

    /// Stage the next state for a cell.
    ///
    /// Only meaningful between [`begin_step`](Self::begin_step) and
    /// [`commit`](Self::commit); later writes to the same cell win.
    pub fn set_pending(&mut self, coord: Coord, code: StateCode) {
        let idx = self.index(coord);
        self.cells[idx].pending = code;
    }

    /// Overwrite a cell's authoritative state directly.
    ///
    /// For grid-exclusive manual operations (state rotation) that run
    /// outside the step cycle — never called by a rule set mid-step.
    pub fn set_state(&mut self, coord: Coord, code: StateCode) {
        let idx = self.index(coord);
        self.cells[idx].state = code;
    }

    /// Seed every cell's `pending` ahead of a rule set's step.
    pub fn begin_step(&mut self, seed: PendingSeed) {
        for cell in &mut self.cells {
            cell.pending = match seed {
                PendingSeed::Copy => cell.state,
                PendingSeed::Fill(code) => code,
            };
        }
    }

    /// Commit the staged generation: `state ← pending` for every cell,
    /// in one pass. Returns the number of cells whose state changed.
    pub fn commit(&mut self) -> usize {
        let mut changed = 0;
        for cell in &mut self.cells {
            if cell.state != cell.pending {
                changed += 1;
            }
            cell.state = cell.pending;
        }
        changed
    }

    /// Populate every cell by cumulative-probability sampling.
    ///
    /// `weights` pairs each state with its probability as a fraction;
    /// for each cell one uniform draw in `[0, 100)` is compared against
    /// the running total of `weight * 100`. The first state whose
    /// cumulative weight exceeds the draw wins; if rounding leaves no
    /// winner the last state is used. Reproducible given a seeded RNG.
    ///
    /// Returns [`GridError::InvalidDistribution`] if `weights` is empty.
    /// The engine has already checked the list against the rule set's
    /// states, so length mismatches surface there, not here.
    pub fn populate<R: Rng>(
        &mut self,
        weights: &[(StateCode, f64)],
        rng: &mut R,
    ) -> Result<(), GridError> {
        let Some((last, _)) = weights.last() else {
            return Err(GridError::InvalidDistribution {
                reason: "empty weight list".into(),
            });
        };
        let last = *last;
        for cell in &mut self.cells {
            let draw: f64 = rng.random_range(0.0..100.0);
            let mut cumulative = 0.0;
            let mut chosen = last;
            for &(code, weight) in weights {
                cumulative += weight * 100.0;
                if draw < cumulative {
                    chosen = code;
                    break;
                }
            }
            cell.state = chosen;
            cell.pending = chosen;
        }
        Ok(())
    }

    /// Deep-copy the authoritative states.
    pub fn snapshot(&self) -> LatticeSnapshot {
        LatticeSnapshot {
            rows: self.rows(),
            cols: self.cols(),
            states: self.cells.iter().map(|c| c.state).collect(),
        }
    }

    /// Restore the authoritative states from a snapshot.
    ///
    /// Used by history rewind/replay; never recomputes anything.
    /// Panics if the snapshot's dimensions do not match — snapshots
    /// only travel between a lattice and its own history.
    pub fn restore(&mut self, snapshot: &LatticeSnapshot) {
        assert_eq!(snapshot.rows, self.rows(), "snapshot row mismatch");
        assert_eq!(snapshot.cols, self.cols(), "snapshot col mismatch");
        for (cell, &state) in self.cells.iter_mut().zip(&snapshot.states) {
            cell.state = state;
            cell.pending = state;
        }
    }

    /// Count of cells currently holding `code`.
    pub fn count(&self, code: StateCode) -> usize {
        self.cells.iter().filter(|c| c.state == code).count()
    }
}

impl std::fmt::Debug for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lattice")
            .field("rows", &self.rows())
            .field("cols", &self.cols())
            .finish()
    }
}
