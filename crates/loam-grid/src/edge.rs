//! Lattice edge (boundary) behaviour.

/// How a lattice handles neighbour offsets that land outside its bounds.
///
/// Every current rule set runs with [`EdgeRule::Absorb`]; `Wrap` is the
/// reserved toroidal mode exposed through the construction interface
/// and implemented at the topology level.
///
/// # Examples
///
/// ```
/// use loam_core::Coord;
/// use loam_grid::{EdgeRule, Neighbourhood, SquareGrid, Topology};
///
/// // Absorb: a corner has 2 cardinal neighbours, an interior cell 4.
/// let absorb = SquareGrid::new(4, 4, EdgeRule::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(Coord::new(0, 0), Neighbourhood::Cardinal).len(), 2);
/// assert_eq!(absorb.neighbours(Coord::new(1, 1), Neighbourhood::Cardinal).len(), 4);
///
/// // Wrap: every cell has exactly 4 cardinal neighbours (torus).
/// let wrap = SquareGrid::new(4, 4, EdgeRule::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(Coord::new(0, 0), Neighbourhood::Cardinal).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeRule {
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
}

/// Resolve a single axis value under the given edge rule.
///
/// Returns `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeRule) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeRule::Absorb => None,
        EdgeRule::Wrap => Some(((val % n) + n) % n),
    }
}
