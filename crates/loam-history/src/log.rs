//! The generation log.
//!
//! [`History`] is an append-only vector of lattice snapshots with a
//! cursor: `snapshots[i]` is the grid exactly as generation `i` was
//! published, and the cursor names the generation the simulation
//! currently shows. Rewinding moves the cursor without discarding
//! anything, so stepping forward again replays the cached snapshot
//! instead of recomputing — the replayed grid is bit-identical because
//! computation is deterministic and happens only at the tip.
//!
//! The log never branches. A caller that mutates the grid while the
//! cursor sits mid-history (manual state rotation) diverges from the
//! cached future; the next forward step replays the recorded snapshot
//! over that divergence. That is the documented contract, not a bug.

use crate::error::HistoryError;
use loam_core::Generation;
use loam_grid::LatticeSnapshot;

/// Append-only snapshot log with a navigation cursor.
#[derive(Debug)]
pub struct History {
    snapshots: Vec<LatticeSnapshot>,
    cursor: usize,
}

impl History {
    /// Start a log at generation 0 with the initial grid.
    pub fn new(initial: LatticeSnapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The generation the cursor currently points at.
    pub fn generation(&self) -> Generation {
        Generation(self.cursor as u64)
    }

    /// Number of recorded generations, including generation 0.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// A log always holds at least generation 0.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the cursor is at the newest recorded generation.
    pub fn at_tip(&self) -> bool {
        self.cursor + 1 == self.snapshots.len()
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &LatticeSnapshot {
        &self.snapshots[self.cursor]
    }

    /// The snapshot of an arbitrary recorded generation, if recorded.
    pub fn get(&self, generation: Generation) -> Option<&LatticeSnapshot> {
        self.snapshots.get(generation.0 as usize)
    }

    /// Append a freshly computed generation and advance the cursor.
    ///
    /// Only meaningful at the tip; the engine computes new generations
    /// nowhere else. Recording while rewound would imply a branch, which
    /// the log does not model.
    pub fn record(&mut self, snapshot: LatticeSnapshot) {
        debug_assert!(self.at_tip(), "record while rewound");
        self.snapshots.push(snapshot);
        self.cursor += 1;
    }

    /// Move the cursor back one generation.
    ///
    /// Returns the snapshot to restore, or
    /// [`HistoryError::NoHistory`] at generation 0.
    pub fn back(&mut self) -> Result<&LatticeSnapshot, HistoryError> {
        if self.cursor == 0 {
            return Err(HistoryError::NoHistory);
        }
        self.cursor -= 1;
        Ok(&self.snapshots[self.cursor])
    }

    /// Advance the cursor into the cached future, if any.
    ///
    /// Returns the snapshot to restore, or `None` when the cursor is at
    /// the tip and the next generation must be computed.
    pub fn forward(&mut self) -> Option<&LatticeSnapshot> {
        if self.at_tip() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }
}
