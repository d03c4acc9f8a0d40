//! 2D triangular lattice: alternating upward/downward triangles.

use crate::edge::EdgeRule;
use crate::error::GridError;
use crate::topology::{check_dims, push_resolved, NeighbourList, Neighbourhood, Topology};
use loam_core::Coord;
use smallvec::SmallVec;

/// Edge-adjacent offsets for an upward triangle: W, E, S.
const UP_CARDINAL: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, 1)];

/// Full (edge + vertex) offsets for an upward triangle:
/// three over the apex, four alongside, four along the base.
const UP_FULL: [(i32, i32); 11] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-2, 0),
    (-1, 0),
    (1, 0),
    (2, 0),
    (-2, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A two-dimensional triangular lattice.
///
/// Cells alternate orientation: a cell is an upward-pointing triangle
/// when `col + row` is even and downward-pointing otherwise. A
/// downward triangle's offsets are the upward offsets with the row
/// deltas negated (mirrored sets).
///
/// [`Neighbourhood::Cardinal`] yields the 3 edge-adjacent cells;
/// [`Neighbourhood::Full`] yields 11 cells including vertex contacts.
///
/// # Examples
///
/// ```
/// use loam_core::Coord;
/// use loam_grid::{EdgeRule, Neighbourhood, TriGrid, Topology};
///
/// let tri = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
/// let up = Coord::new(4, 4);
/// assert_eq!(tri.neighbours(up, Neighbourhood::Cardinal).len(), 3);
/// assert_eq!(tri.neighbours(up, Neighbourhood::Full).len(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct TriGrid {
    rows: u32,
    cols: u32,
    edge: EdgeRule,
}

impl TriGrid {
    /// Create a new triangular lattice with `rows * cols` cells.
    ///
    /// Returns [`GridError::InvalidDimension`] if either axis is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, edge: EdgeRule) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Ok(Self { rows, cols, edge })
    }

    /// Whether the cell at `coord` is an upward-pointing triangle.
    pub fn points_up(coord: Coord) -> bool {
        (coord.col + coord.row) % 2 == 0
    }
}

impl Topology for TriGrid {
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
        let up = Self::points_up(coord);
        let mut out: NeighbourList = SmallVec::new();
        match scope {
            Neighbourhood::Cardinal => {
                for (dc, dr) in UP_CARDINAL {
                    let dr = if up { dr } else { -dr };
                    push_resolved(&mut out, coord, dc, dr, self.rows, self.cols, self.edge);
                }
            }
            Neighbourhood::Full => {
                for (dc, dr) in UP_FULL {
                    let dr = if up { dr } else { -dr };
                    push_resolved(&mut out, coord, dc, dr, self.rows, self.cols, self.edge);
                }
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

    #[test]
    fn orientation_parity() {
        assert!(TriGrid::points_up(c(0, 0)));
        assert!(!TriGrid::points_up(c(1, 0)));
        assert!(!TriGrid::points_up(c(0, 1)));
        assert!(TriGrid::points_up(c(1, 1)));
    }

    #[test]
    fn upward_cardinal_interior() {
        let t = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        let n = t.neighbours(c(4, 4), Neighbourhood::Cardinal);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(3, 4))); // west
        assert!(n.contains(&c(5, 4))); // east
        assert!(n.contains(&c(4, 5))); // across the base, below
    }

    #[test]
    fn downward_cardinal_is_mirrored() {
        let t = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        let n = t.neighbours(c(3, 4), Neighbourhood::Cardinal);
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(2, 4)));
        assert!(n.contains(&c(4, 4)));
        assert!(n.contains(&c(3, 3))); // across the base, above
    }

    #[test]
    fn upward_full_interior() {
        let t = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        let n = t.neighbours(c(4, 4), Neighbourhood::Full);
        assert_eq!(n.len(), 11);
        // Three over the apex.
        for dc in -1..=1 {
            assert!(n.contains(&c(4 + dc, 3)));
        }
        // Four alongside.
        for dc in [-2, -1, 1, 2] {
            assert!(n.contains(&c(4 + dc, 4)));
        }
        // Four along the base.
        for dc in -2..=1 {
            assert!(n.contains(&c(4 + dc, 5)));
        }
    }

    #[test]
    fn downward_full_is_mirrored() {
        let t = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        let up = t.neighbours(c(4, 4), Neighbourhood::Full);
        let down = t.neighbours(c(3, 4), Neighbourhood::Full);
        assert_eq!(down.len(), 11);
        // Mirror: same column deltas, negated row deltas.
        for nb in up.iter() {
            let mirrored = c(3 + (nb.col - 4), 4 - (nb.row - 4));
            assert!(down.contains(&mirrored), "missing mirror of {nb}");
        }
    }

    #[test]
    fn cardinal_neighbours_are_symmetric() {
        let t = TriGrid::new(6, 6, EdgeRule::Absorb).unwrap();
        compliance::assert_neighbours_symmetric(&t, Neighbourhood::Cardinal);
    }

    #[test]
    fn compliance_absorb() {
        let t = TriGrid::new(8, 8, EdgeRule::Absorb).unwrap();
        compliance::run_full_compliance(&t);
    }

    proptest! {
        #[test]
        fn neighbours_within_bounds_distinct_excluding_self(
            rows in 1u32..10,
            cols in 1u32..10,
            col in 0i32..10,
            row in 0i32..10,
        ) {
            let col = col % cols as i32;
            let row = row % rows as i32;
            let t = TriGrid::new(rows, cols, EdgeRule::Absorb).unwrap();
            for scope in [Neighbourhood::Cardinal, Neighbourhood::Full] {
                compliance::assert_neighbour_contract(&t, c(col, row), scope);
            }
        }
    }
}
