//! Core types for the Loam cellular-automaton workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Loam workspace:
//! cell coordinates, state codes, and the generation counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod state;

pub use coord::{Coord, Generation};
pub use state::StateCode;
