//! 2D hexagonal lattice with column-parity ("odd-q") offset coordinates.

use crate::edge::EdgeRule;
use crate::error::GridError;
use crate::topology::{check_dims, push_resolved, NeighbourList, Neighbourhood, Topology};
use loam_core::Coord;
use smallvec::SmallVec;

/// Offsets for even columns, `(dcol, drow)` order: E, NE, N, NW, W, S.
const EVEN_COL: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)];

/// Offsets for odd columns: E, SE, N, NW → mirrored down the column shift.
const ODD_COL: [(i32, i32); 6] = [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A two-dimensional hexagonal lattice in offset coordinates.
///
/// Uses the "odd-q" vertical layout: odd columns are shifted half a
/// cell down, so the six neighbour offsets depend on column parity.
/// Every neighbour is edge-adjacent, so [`Neighbourhood`] has no
/// effect — `Cardinal` and `Full` return the same six cells.
///
/// # Examples
///
/// ```
/// use loam_core::Coord;
/// use loam_grid::{EdgeRule, HexGrid, Neighbourhood, Topology};
///
/// let hex = HexGrid::new(5, 5, EdgeRule::Absorb).unwrap();
/// let interior = Coord::new(2, 2);
/// assert_eq!(hex.neighbours(interior, Neighbourhood::Cardinal).len(), 6);
/// assert_eq!(hex.neighbours(interior, Neighbourhood::Full).len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct HexGrid {
    rows: u32,
    cols: u32,
    edge: EdgeRule,
}

impl HexGrid {
    /// Create a new hexagonal lattice with `rows * cols` cells.
    ///
    /// Returns [`GridError::InvalidDimension`] if either axis is 0, or
    /// [`GridError::DimensionTooLarge`] if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32, edge: EdgeRule) -> Result<Self, GridError> {
        check_dims(rows, cols)?;
        Ok(Self { rows, cols, edge })
    }
}

impl Topology for HexGrid {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn edge_rule(&self) -> EdgeRule {
        self.edge
    }

    fn neighbours(&self, coord: Coord, _scope: Neighbourhood) -> NeighbourList {
        let offsets = if coord.col % 2 == 0 { EVEN_COL } else { ODD_COL };
        let mut out: NeighbourList = SmallVec::new();
        for (dc, dr) in offsets {
            push_resolved(&mut out, coord, dc, dr, self.rows, self.cols, self.edge);
        }
        out
    }
}
