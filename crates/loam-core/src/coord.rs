//! Cell coordinates and the generation counter.

use std::fmt;

/// A cell coordinate on a two-dimensional lattice.
///
/// Coordinates are zero-based with `col` increasing to the east and
/// `row` increasing to the south. Both axes are `i32` so that neighbour
/// offsets can be applied without intermediate casts; out-of-range
/// results are filtered by the topology, never stored.
///
/// `Coord` is the identity key for engine-owned per-cell bookkeeping
/// (turn counters, gradients): "the occupant of this cell", not a
/// particular object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column (x), zero-based.
    pub col: i32,
    /// Row (y), zero-based.
    pub row: i32,
}

impl Coord {
    /// Construct a coordinate from column and row.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Apply a `(dcol, drow)` offset without bounds checking.
    ///
    /// Bounds handling is the topology's job; see
    /// `Topology::neighbours` in `loam-grid`.
    pub fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// Monotonically increasing generation counter.
///
/// Incremented each time a simulation computes one step. Replaying a
/// cached generation from history does not mint a new `Generation`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
