//! Test utilities and fixtures for Loam development.
//!
//! Provides canned lattice builders and scripted rule sets for
//! exercising the engine and history machinery without dragging a
//! real automaton into the test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use loam_core::{Coord, StateCode};
use loam_grid::{EdgeRule, Lattice, SquareGrid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use fixtures::{ConstRule, CyclingRule, FailingRule};

/// A seeded ChaCha8 stream for deterministic tests.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// An `n × n` absorb-edge square lattice, all cells in state 0.
pub fn square_lattice(n: u32) -> Lattice {
    Lattice::new(Box::new(
        SquareGrid::new(n, n, EdgeRule::Absorb).expect("test lattice dims"),
    ))
}

/// An `n × n` absorb-edge square lattice with the given cells painted.
///
/// `cells` lists `(col, row, state)` triples; everything else stays 0.
pub fn square_lattice_with(n: u32, cells: &[(i32, i32, StateCode)]) -> Lattice {
    let mut lattice = square_lattice(n);
    for &(col, row, state) in cells {
        lattice.set_state(Coord::new(col, row), state);
    }
    lattice
}

/// Paint every cell of a lattice with one state.
pub fn fill(lattice: &mut Lattice, state: StateCode) {
    for coord in lattice.coords() {
        lattice.set_state(coord, state);
    }
}
