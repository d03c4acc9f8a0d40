//! Simulation engine for Loam cellular automata.
//!
//! Orchestrates one automaton run: [`SimConfig`] validates the lattice
//! shape, population distribution, and seed against a rule set;
//! [`Simulation`] owns the lattice, rule set, seeded RNG, and history,
//! and drives stepping, rewinding, and cached replay. [`StepMetrics`]
//! is the observability surface.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod sim;

pub use config::SimConfig;
pub use error::{ConfigError, RotateError};
pub use metrics::StepMetrics;
pub use sim::Simulation;
