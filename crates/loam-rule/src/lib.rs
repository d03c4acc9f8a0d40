//! The [`RuleSet`] trait and its execution context.
//!
//! Rule sets are the pluggable local-update operators of a Loam
//! simulation: one per automaton kind, executed once per generation by
//! the engine. They read current-generation state, stage next states
//! through the lattice's pending buffer, and own whatever per-cell
//! auxiliary memory their rule requires.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod ruleset;

pub use context::StepContext;
pub use error::RuleError;
pub use ruleset::RuleSet;
