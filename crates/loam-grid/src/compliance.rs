//! Topology compliance test helpers.
//!
//! These functions verify that a [`Topology`] implementation satisfies
//! the invariants required by the trait contract. Reused across all
//! backend test modules (SquareGrid, HexGrid, TriGrid).

use crate::topology::{Neighbourhood, Topology};
use loam_core::Coord;
use std::collections::BTreeSet;

/// Assert the neighbour contract for one cell and scope: results are
/// pairwise distinct, in bounds, and never include the cell itself.
pub fn assert_neighbour_contract(topo: &dyn Topology, coord: Coord, scope: Neighbourhood) {
    let neighbours = topo.neighbours(coord, scope);
    let mut seen = BTreeSet::new();
    for nb in &neighbours {
        assert!(
            topo.in_bounds(*nb),
            "neighbour {nb} of {coord} out of bounds ({} x {})",
            topo.cols(),
            topo.rows(),
        );
        assert_ne!(*nb, coord, "cell {coord} listed as its own neighbour");
        assert!(seen.insert(*nb), "duplicate neighbour {nb} of {coord}");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
///
/// Holds for every backend and scope except TriGrid's 11-cell full
/// neighbourhood, whose reference offset set is not adjacency-symmetric.
pub fn assert_neighbours_symmetric(topo: &dyn Topology, scope: Neighbourhood) {
    for coord in topo.canonical_ordering() {
        for nb in topo.neighbours(coord, scope) {
            let back = topo.neighbours(nb, scope);
            assert!(
                back.contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(topo: &dyn Topology) {
    let a = topo.canonical_ordering();
    let b = topo.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique
/// in-bounds coordinates.
pub fn assert_canonical_ordering_complete(topo: &dyn Topology) {
    let ordering = topo.canonical_ordering();
    assert_eq!(
        ordering.len(),
        topo.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        topo.cell_count()
    );
    let unique: BTreeSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        topo.cell_count(),
        "canonical_ordering has duplicates"
    );
    for coord in &ordering {
        assert!(topo.in_bounds(*coord));
    }
}

/// Run every scope-independent compliance check on a topology, plus the
/// neighbour contract for both scopes over every cell.
pub fn run_full_compliance(topo: &dyn Topology) {
    assert_canonical_ordering_deterministic(topo);
    assert_canonical_ordering_complete(topo);
    for coord in topo.canonical_ordering() {
        assert_neighbour_contract(topo, coord, Neighbourhood::Cardinal);
        assert_neighbour_contract(topo, coord, Neighbourhood::Full);
    }
}
