//! Snapshot comparison for determinism verification.
//!
//! Cheap equality first; on mismatch, a per-cell report naming exactly
//! which coordinates diverged and how. Used by tests that replay a run
//! from its seed and expect bit-identical history.

use loam_core::{Coord, StateCode};
use loam_grid::LatticeSnapshot;

/// A single cell-level divergence between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDivergence {
    /// The coordinate that diverged.
    pub coord: Coord,
    /// State in the expected snapshot.
    pub expected: StateCode,
    /// State in the actual snapshot.
    pub actual: StateCode,
}

/// Report of all divergences between two same-shaped snapshots.
#[derive(Clone, Debug)]
pub struct DivergenceReport {
    /// Every cell where the snapshots disagree, in row-major order.
    pub divergences: Vec<CellDivergence>,
}

/// Compare two snapshots cell by cell.
///
/// Returns `None` when they are identical. Callers compare snapshots of
/// one lattice, so dimensions always match; a mismatch is a programming
/// error caught by `debug_assert`.
pub fn compare_snapshots(
    expected: &LatticeSnapshot,
    actual: &LatticeSnapshot,
) -> Option<DivergenceReport> {
    debug_assert_eq!(expected.rows(), actual.rows(), "snapshot row mismatch");
    debug_assert_eq!(expected.cols(), actual.cols(), "snapshot col mismatch");
    if expected == actual {
        return None;
    }
    let cols = expected.cols() as usize;
    let divergences = expected
        .states()
        .iter()
        .zip(actual.states())
        .enumerate()
        .filter(|(_, (e, a))| e != a)
        .map(|(i, (&e, &a))| CellDivergence {
            coord: Coord::new((i % cols) as i32, (i / cols) as i32),
            expected: e,
            actual: a,
        })
        .collect();
    Some(DivergenceReport { divergences })
}
