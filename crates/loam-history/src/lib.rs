//! Generation history for Loam simulations.
//!
//! Records every published generation as a deep snapshot, supports
//! rewinding and cached replay through a cursor, and provides a
//! cell-level comparison helper for determinism verification.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod log;

pub use compare::{compare_snapshots, CellDivergence, DivergenceReport};
pub use error::HistoryError;
pub use log::History;
