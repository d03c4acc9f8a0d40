//! The simulation orchestrator.
//!
//! [`Simulation`] owns everything one automaton run needs: the lattice,
//! the active rule set, the seeded random stream, the generation
//! history, and step metrics. All mutating methods take `&mut self`;
//! the type is [`Send`] but not reentrant, so a run can move between
//! threads but never be driven from two at once.
//!
//! # Determinism
//!
//! Randomness is drawn exclusively from the owned `ChaCha8Rng`, seeded
//! from [`SimConfig::seed`]. Forward steps into cached history restore
//! snapshots without touching the stream, so rewinding and replaying
//! never desynchronises a run from a twin stepped straight through.

use loam_core::{Coord, Generation};
use loam_grid::{GridError, Lattice, LatticeSnapshot};
use loam_history::{History, HistoryError};
use loam_rule::{RuleError, RuleSet, StepContext};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::error::{ConfigError, RotateError};
use crate::metrics::StepMetrics;

// Simulation must stay Send so a run can be handed to a worker thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A single automaton run: lattice, rule set, RNG, history, metrics.
pub struct Simulation {
    lattice: Lattice,
    rules: Box<dyn RuleSet>,
    rng: ChaCha8Rng,
    history: History,
    metrics: StepMetrics,
    seed: u64,
}

impl Simulation {
    /// Build a simulation from a validated configuration.
    ///
    /// Validates the config against the rule set, constructs the
    /// lattice, populates it from the weight distribution using the
    /// seeded stream, and records generation 0.
    pub fn new(config: SimConfig, rules: Box<dyn RuleSet>) -> Result<Self, ConfigError> {
        config.validate(rules.as_ref())?;
        let topology = config.topology.build(config.rows, config.cols, config.edge)?;
        let mut lattice = Lattice::new(topology);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        lattice.populate(&config.weights, &mut rng)?;
        let history = History::new(lattice.snapshot());
        Ok(Self {
            lattice,
            rules,
            rng,
            history,
            metrics: StepMetrics::default(),
            seed: config.seed,
        })
    }

    /// Advance one generation. Alias for [`step_forward`](Self::step_forward).
    pub fn step(&mut self) -> Result<LatticeSnapshot, RuleError> {
        self.step_forward()
    }

    /// Advance one generation, replaying cached history when possible.
    ///
    /// At the tip of history the rule set runs and the new generation
    /// is recorded; behind the tip the cached snapshot is restored with
    /// no rule execution and no randomness consumed. Returns the
    /// resulting grid.
    ///
    /// # Errors
    ///
    /// Returns the rule set's error if `step()` fails. The lattice is
    /// left at the current generation; a failed step stages nothing.
    pub fn step_forward(&mut self) -> Result<LatticeSnapshot, RuleError> {
        if let Some(cached) = self.history.forward() {
            let snap = cached.clone();
            self.lattice.restore(&snap);
            self.metrics.replayed_steps += 1;
            self.metrics.generation = self.history.generation().0;
            return Ok(snap);
        }

        self.lattice.begin_step(self.rules.pending_seed());
        let generation = self.history.generation().next();
        let mut ctx = StepContext::new(&mut self.lattice, &mut self.rng, generation);
        self.rules.step(&mut ctx)?;
        let changed = self.lattice.commit();

        let snap = self.lattice.snapshot();
        self.history.record(snap.clone());
        self.metrics.generation = generation.0;
        self.metrics.cells_changed = changed;
        self.metrics.computed_steps += 1;
        Ok(snap)
    }

    /// Rewind one generation, restoring the previous snapshot.
    ///
    /// Returns [`HistoryError::NoHistory`] at generation 0.
    pub fn step_back(&mut self) -> Result<LatticeSnapshot, HistoryError> {
        let snap = self.history.back()?.clone();
        self.lattice.restore(&snap);
        self.metrics.rewound_steps += 1;
        self.metrics.generation = self.history.generation().0;
        Ok(snap)
    }

    /// Manually rotate one cell to its next state.
    ///
    /// A grid-exclusive operation outside the step cycle, delegated to
    /// the rule set. Rule sets without a defined rotation reject it.
    /// The mutation is not recorded in history; a later forward step
    /// into cached history replays the recorded snapshot over it.
    pub fn rotate_state(&mut self, col: i32, row: i32) -> Result<(), RotateError> {
        let coord = Coord::new(col, row);
        if !self.lattice.in_bounds(coord) {
            return Err(RotateError::OutOfBounds(GridError::OutOfBounds {
                coord,
                bounds: format!(
                    "{} cols x {} rows",
                    self.lattice.cols(),
                    self.lattice.rows()
                ),
            }));
        }
        self.rules.rotate(&mut self.lattice, coord)?;
        Ok(())
    }

    /// The generation the simulation currently shows.
    pub fn generation(&self) -> Generation {
        self.history.generation()
    }

    /// Read access to the live lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// A deep copy of the current grid, for rendering.
    pub fn snapshot(&self) -> LatticeSnapshot {
        self.lattice.snapshot()
    }

    /// The recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Metrics from stepping so far.
    pub fn metrics(&self) -> &StepMetrics {
        &self.metrics
    }

    /// The active rule set's name.
    pub fn rule_name(&self) -> &str {
        self.rules.name()
    }

    /// The configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("rule", &self.rules.name())
            .field("generation", &self.history.generation())
            .field("rows", &self.lattice.rows())
            .field("cols", &self.lattice.cols())
            .field("seed", &self.seed)
            .finish()
    }
}
