//! Loam: a deterministic cellular-automaton simulation engine with
//! rewindable history.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Loam sub-crates. For most users, adding `loam` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//! use loam::rules::{fire, FireRule};
//!
//! // A 20×20 forest, 70% tree, a few cells already burning.
//! let config = SimConfig {
//!     topology: TopologyKind::Square,
//!     edge: EdgeRule::Absorb,
//!     rows: 20,
//!     cols: 20,
//!     weights: vec![
//!         (fire::EMPTY, 0.25),
//!         (fire::TREE, 0.70),
//!         (fire::BURNING, 0.05),
//!     ],
//!     seed: 42,
//! };
//! let rule = FireRule::new(0.8).unwrap();
//! let mut sim = Simulation::new(config, Box::new(rule)).unwrap();
//!
//! let after_one = sim.step_forward().unwrap();
//! sim.step_forward().unwrap();
//! let rewound = sim.step_back().unwrap();
//! assert_eq!(rewound, after_one);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | `Coord`, `StateCode`, `Generation` |
//! | [`grid`] | `loam-grid` | `Lattice`, topology backends, `EdgeRule` |
//! | [`rule`] | `loam-rule` | The `RuleSet` trait and `StepContext` |
//! | [`rules`] | `loam-rules` | The five reference rule sets |
//! | [`history`] | `loam-history` | Snapshot log, rewind, comparison |
//! | [`engine`] | `loam-engine` | `SimConfig`, `Simulation`, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fundamental vocabulary (`loam-core`): coordinates, state codes, and
/// the generation counter.
pub use loam_core as types;

/// Lattice storage and topology backends (`loam-grid`).
///
/// The [`grid::Topology`] trait with [`grid::SquareGrid`],
/// [`grid::HexGrid`], and [`grid::TriGrid`] backends, plus the
/// double-buffered [`grid::Lattice`].
pub use loam_grid as grid;

/// The rule-set extension point (`loam-rule`).
///
/// Implement [`rule::RuleSet`] to plug a new automaton into the engine.
pub use loam_rule as rule;

/// Reference rule sets (`loam-rules`): fire, life, predator-prey,
/// segregation, and rock-paper-scissors.
pub use loam_rules as rules;

/// Generation history (`loam-history`): snapshot log, rewind and cached
/// replay, cell-level snapshot comparison.
pub use loam_history as history;

/// Simulation orchestration (`loam-engine`): configuration validation,
/// stepping, and metrics.
pub use loam_engine as engine;

/// Common imports for typical Loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_core::{Coord, Generation, StateCode};

    pub use loam_grid::{
        EdgeRule, Lattice, LatticeSnapshot, Neighbourhood, PendingSeed, Topology, TopologyKind,
    };

    pub use loam_rule::{RuleSet, StepContext};

    // Errors
    pub use loam_engine::{ConfigError, RotateError};
    pub use loam_grid::GridError;
    pub use loam_history::HistoryError;
    pub use loam_rule::RuleError;

    pub use loam_history::History;

    pub use loam_engine::{SimConfig, Simulation, StepMetrics};
}
