//! The core [`Topology`] trait and the neighbourhood selector.

use crate::edge::EdgeRule;
use crate::error::GridError;
use crate::{HexGrid, SquareGrid, TriGrid};
use loam_core::Coord;
use smallvec::SmallVec;

/// Neighbour list returned by [`Topology::neighbours`].
///
/// Inline capacity of 12 avoids heap allocation for every backend
/// (TriGrid's full neighbourhood of 11 is the largest).
pub type NeighbourList = SmallVec<[Coord; 12]>;

/// Which neighbours of a cell to enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// Neighbours reachable by one axis-aligned step. Four on a square
    /// grid, three on a triangular grid; no effect on a hex grid.
    Cardinal,
    /// All adjacent neighbours, including diagonal/vertex contacts.
    Full,
}

/// Central adjacency abstraction for Loam lattices.
///
/// All rule sets enumerate neighbours through this trait. Concrete
/// backends ([`SquareGrid`], [`HexGrid`], [`TriGrid`]) implement it to
/// define their connectivity.
///
/// Neighbour lookup is a pure function of coordinate, scope, and the
/// backend's parameters: it never mutates anything and two calls with
/// the same arguments return the same list in the same order.
pub trait Topology: Send + 'static {
    /// Number of rows.
    fn rows(&self) -> u32;

    /// Number of columns.
    fn cols(&self) -> u32;

    /// Boundary behaviour.
    fn edge_rule(&self) -> EdgeRule;

    /// Total number of cells.
    fn cell_count(&self) -> usize {
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether a coordinate lies inside the lattice bounds.
    fn in_bounds(&self, coord: Coord) -> bool {
        coord.col >= 0
            && coord.col < self.cols() as i32
            && coord.row >= 0
            && coord.row < self.rows() as i32
    }

    /// Enumerate the neighbours of a cell.
    ///
    /// Coordinates are returned in a deterministic, backend-defined
    /// order. Offsets that resolve out of bounds under
    /// [`EdgeRule::Absorb`] are silently dropped, never reported as
    /// errors. The cell itself is never included.
    fn neighbours(&self, coord: Coord, scope: Neighbourhood) -> NeighbourList;

    /// All cells in row-major canonical order.
    ///
    /// Two calls on the same backend return the same sequence. Rule
    /// sets iterate this ordering so that, given a fixed random stream,
    /// a step is reproducible.
    fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                out.push(Coord::new(col, row));
            }
        }
        out
    }
}

/// Selector for the three lattice backends.
///
/// The variant set is closed: rendering shape is the presentation
/// layer's concern, adjacency is ours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    /// 4/8-connected square lattice.
    Square,
    /// 6-connected hexagonal lattice.
    Hexagonal,
    /// 3/11-connected triangular lattice.
    Triangular,
}

impl TopologyKind {
    /// Construct the backend for this kind.
    pub fn build(self, rows: u32, cols: u32, edge: EdgeRule) -> Result<Box<dyn Topology>, GridError> {
        Ok(match self {
            Self::Square => Box::new(SquareGrid::new(rows, cols, edge)?),
            Self::Hexagonal => Box::new(HexGrid::new(rows, cols, edge)?),
            Self::Triangular => Box::new(TriGrid::new(rows, cols, edge)?),
        })
    }
}

/// Maximum axis extent: coordinates use `i32`, so each axis must fit.
pub(crate) const MAX_DIM: u32 = i32::MAX as u32;

/// Validate axis extents shared by every backend constructor.
pub(crate) fn check_dims(rows: u32, cols: u32) -> Result<(), GridError> {
    if rows == 0 {
        return Err(GridError::InvalidDimension {
            name: "rows",
            value: rows,
        });
    }
    if cols == 0 {
        return Err(GridError::InvalidDimension {
            name: "cols",
            value: cols,
        });
    }
    if rows > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "rows",
            value: rows,
            max: MAX_DIM,
        });
    }
    if cols > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "cols",
            value: cols,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// Resolve an offset against bounds, pushing the result if it survives.
///
/// Shared by every backend's neighbour enumeration.
pub(crate) fn push_resolved(
    out: &mut NeighbourList,
    coord: Coord,
    dcol: i32,
    drow: i32,
    rows: u32,
    cols: u32,
    edge: EdgeRule,
) {
    let col = crate::edge::resolve_axis(coord.col + dcol, cols, edge);
    let row = crate::edge::resolve_axis(coord.row + drow, rows, edge);
    if let (Some(col), Some(row)) = (col, row) {
        let nb = Coord::new(col, row);
        // A wrap on a 1- or 2-wide axis can land back on the cell itself
        // or on a cell another offset already produced.
        if nb != coord && !out.contains(&nb) {
            out.push(nb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_builds_matching_backend() {
        let sq = TopologyKind::Square.build(3, 3, EdgeRule::Absorb).unwrap();
        assert_eq!(sq.cell_count(), 9);
        let hex = TopologyKind::Hexagonal
            .build(4, 5, EdgeRule::Absorb)
            .unwrap();
        assert_eq!(hex.cell_count(), 20);
        let tri = TopologyKind::Triangular
            .build(2, 2, EdgeRule::Absorb)
            .unwrap();
        assert_eq!(tri.cell_count(), 4);
    }

    #[test]
    fn check_dims_rejects_zero() {
        assert!(matches!(
            check_dims(0, 5),
            Err(GridError::InvalidDimension { name: "rows", .. })
        ));
        assert!(matches!(
            check_dims(5, 0),
            Err(GridError::InvalidDimension { name: "cols", .. })
        ));
    }

    #[test]
    fn check_dims_rejects_oversized() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            check_dims(big, 1),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let sq = SquareGrid::new(2, 3, EdgeRule::Absorb).unwrap();
        let order = sq.canonical_ordering();
        assert_eq!(
            order,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
            ]
        );
    }
}
