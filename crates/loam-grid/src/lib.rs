//! Lattice storage and topology backends for Loam simulations.
//!
//! This crate defines the [`Topology`] trait — the neighbour-adjacency
//! abstraction through which all rule sets enumerate neighbours — along
//! with concrete lattice backends and the double-buffered [`Lattice`]
//! that owns cell state.
//!
//! # Backends
//!
//! - [`SquareGrid`]: 4 cardinal neighbours, 8 with diagonals
//! - [`HexGrid`]: 6 neighbours via column-parity offsets
//! - [`TriGrid`]: 3 edge neighbours or 11 full, mirrored by triangle
//!   orientation
//!
//! Boundary handling is controlled by [`EdgeRule`]: absorb (default for
//! every current rule set) or wrap (reserved toroidal mode).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod hex;
pub mod lattice;
pub mod square;
pub mod topology;
pub mod tri;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeRule;
pub use error::GridError;
pub use hex::HexGrid;
pub use lattice::{Lattice, LatticeSnapshot, PendingSeed};
pub use square::SquareGrid;
pub use topology::{Neighbourhood, NeighbourList, Topology, TopologyKind};
pub use tri::TriGrid;
