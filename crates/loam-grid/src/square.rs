//! 2D square lattice: 4 cardinal neighbours, 8 with diagonals.

use crate::edge::EdgeRule;
use crate::error::GridError;
use crate::topology::{check_dims, push_resolved, NeighbourList, Neighbourhood, Topology};
use loam_core::Coord;
use smallvec::SmallVec;

/// Cardinal offsets in `(dcol, drow)` order: N, E, S, W.
const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal offsets: NE, SE, SW, NW.
const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// A two-dimensional square lattice.
///
/// [`Neighbourhood::Cardinal`] yields the four axis-aligned neighbours;
/// [`Neighbourhood::Full`] adds the four diagonals for eight total.
///
/// # Examples
///
/// ```
/// use loam_core::Coord;
/// use loam_grid::{EdgeRule, Neighbourhood, SquareGrid, Topology};
///
/// let grid = SquareGrid::new(16, 16, EdgeRule::Absorb).unwrap();
/// assert_eq!(grid.cell_count(), 256);
///
/// let centre = Coord::new(8, 8);
/// assert_eq!(grid.neighbours(centre, Neighbourhood::Cardinal).len(), 4);
/// assert_eq!(grid.neighbours(centre, Neighbourhood::Full).len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct SquareGrid {
    rows: u32,
    cols: u32,
    edge: EdgeRule,
}

impl SquareGrid {
    /// Create a new square lattice with `rows * cols` cells.
    ///
    /// Returns [`GridError::InvalidDimension`] if either axis is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, edge: EdgeRule) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Ok(Self { rows, cols, edge })
    }
}

impl Topology for SquareGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn edge_rule(&self) -> EdgeRule {
        self.edge
    }

    fn neighbours(&self, coord: Coord, scope: Neighbourhood) -> NeighbourList {
        let mut out: NeighbourList = SmallVec::new();
        for (dc, dr) in CARDINAL {
            push_resolved(&mut out, coord, dc, dr, self.rows, self.cols, self.edge);
        }
        if scope == Neighbourhood::Full {
            for (dc, dr) in DIAGONAL {
                push_resolved(&mut out, coord, dc, dr, self.rows, self.cols, self.edge);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(col: i32, row: i32) -> Coord {
        Coord::new(col, row)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn cardinal_interior() {
        let s = SquareGrid::new(5, 5, EdgeRule::Absorb).unwrap();
        let n = s.neighbours(c(2, 2), Neighbourhood::Cardinal);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(2, 1))); // north
        assert!(n.contains(&c(3, 2))); // east
        assert!(n.contains(&c(2, 3))); // south
        assert!(n.contains(&c(1, 2))); // west
    }

    #[test]
    fn full_interior_adds_diagonals() {
        let s = SquareGrid::new(5, 5, EdgeRule::Absorb).unwrap();
        let n = s.neighbours(c(2, 2), Neighbourhood::Full);
        assert_eq!(n.len(), 8);
        assert!(n.contains(&c(1, 1)));
        assert!(n.contains(&c(3, 1)));
        assert!(n.contains(&c(1, 3)));
        assert!(n.contains(&c(3, 3)));
    }

    #[test]
    fn absorb_corner() {
        let s = SquareGrid::new(5, 5, EdgeRule::Absorb).unwrap();
        assert_eq!(s.neighbours(c(0, 0), Neighbourhood::Cardinal).len(), 2);
        assert_eq!(s.neighbours(c(0, 0), Neighbourhood::Full).len(), 3);
    }

    #[test]
    fn absorb_edge() {
        let s = SquareGrid::new(5, 5, EdgeRule::Absorb).unwrap();
        assert_eq!(s.neighbours(c(2, 0), Neighbourhood::Cardinal).len(), 3);
        assert_eq!(s.neighbours(c(2, 0), Neighbourhood::Full).len(), 5);
    }

    #[test]
    fn wrap_corner() {
        let s = SquareGrid::new(5, 5, EdgeRule::Wrap).unwrap();
        let n = s.neighbours(c(0, 0), Neighbourhood::Cardinal);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&c(0, 4))); // north wraps
        assert!(n.contains(&c(4, 0))); // west wraps
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
    }

    // ── 1×1 edge case ──────────────────────────────────────────

    #[test]
    fn single_cell_has_no_neighbours() {
        let s = SquareGrid::new(1, 1, EdgeRule::Absorb).unwrap();
        assert!(s.neighbours(c(0, 0), Neighbourhood::Full).is_empty());
        // Even under wrap, a cell is never its own neighbour.
        let s = SquareGrid::new(1, 1, EdgeRule::Wrap).unwrap();
        assert!(s.neighbours(c(0, 0), Neighbourhood::Full).is_empty());
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_axis_is_rejected() {
        assert!(matches!(
            SquareGrid::new(0, 5, EdgeRule::Absorb),
            Err(GridError::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            SquareGrid::new(5, 0, EdgeRule::Absorb),
            Err(GridError::InvalidDimension { name: "cols", .. })
        ));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_absorb() {
        let s = SquareGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn compliance_wrap() {
        let s = SquareGrid::new(8, 8, EdgeRule::Wrap).unwrap();
        compliance::run_full_compliance(&s);
    }

    #[test]
    fn neighbours_symmetric_both_scopes() {
        for edge in [EdgeRule::Absorb, EdgeRule::Wrap] {
            let s = SquareGrid::new(6, 6, edge).unwrap();
            compliance::assert_neighbours_symmetric(&s, Neighbourhood::Cardinal);
            compliance::assert_neighbours_symmetric(&s, Neighbourhood::Full);
        }
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_within_bounds_distinct_excluding_self(
            rows in 1u32..12,
            cols in 1u32..12,
            col in 0i32..12,
            row in 0i32..12,
            wrap in any::<bool>(),
        ) {
            let col = col % cols as i32;
            let row = row % rows as i32;
            let edge = if wrap { EdgeRule::Wrap } else { EdgeRule::Absorb };
            let s = SquareGrid::new(rows, cols, edge).unwrap();
            for scope in [Neighbourhood::Cardinal, Neighbourhood::Full] {
                compliance::assert_neighbour_contract(&s, c(col, row), scope);
            }
        }
    }
}
