//! The [`RuleSet`] trait.

use crate::context::StepContext;
use crate::error::RuleError;
use loam_core::{Coord, StateCode};
use loam_grid::{Lattice, PendingSeed};

/// A pluggable local-update rule for one automaton kind.
///
/// # Contract
///
/// - `step()` reads only current-generation state and writes only
///   `pending`; it must never depend on another cell's staged value.
/// - Given the same lattice contents and the same random stream,
///   `step()` stages identical next states (determinism is what lets
///   history replay instead of recompute).
/// - Auxiliary per-cell memory (turn counters, gradients) is owned by
///   the rule set, keyed by [`Coord`], and mutated only inside `step()`
///   or `rotate()` — hence `&mut self`. It tracks "the occupant of a
///   cell": entries are created on birth, removed on death, and
///   re-keyed on movement, in the same transaction as the pending
///   writes they describe.
///
/// # Object safety
///
/// The engine stores the active rule set as `Box<dyn RuleSet>`; the
/// variant set (Fire, Life, Wator, Segregation, RockPaperScissors) is
/// closed and lives in `loam-rules`.
pub trait RuleSet: Send + 'static {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// The state codes this rule set owns, in enumeration order.
    ///
    /// The engine validates population weights against this list at
    /// construction time; grid contents are not re-validated per step.
    fn states(&self) -> &'static [StateCode];

    /// How the engine seeds every cell's `pending` before `step()`.
    fn pending_seed(&self) -> PendingSeed;

    /// Stage next states for one generation.
    ///
    /// Called once per computed generation, never on history replay.
    /// The engine commits after this returns.
    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError>;

    /// Manually advance one cell to its next state.
    ///
    /// A grid-exclusive operation outside the step cycle, used for
    /// interactive toggling. The default rejects it; rule sets with a
    /// defined rotation (RockPaperScissors) override.
    fn rotate(&mut self, _lattice: &mut Lattice, _coord: Coord) -> Result<(), RuleError> {
        Err(RuleError::UnsupportedOperation {
            rule: self.name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_grid::{EdgeRule, SquareGrid};

    struct Inert;

    impl RuleSet for Inert {
        fn name(&self) -> &str {
            "inert"
        }

        fn states(&self) -> &'static [StateCode] {
            const STATES: [StateCode; 1] = [StateCode(0)];
            &STATES
        }

        fn pending_seed(&self) -> PendingSeed {
            PendingSeed::Copy
        }

        fn step(&mut self, _ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
            Ok(())
        }
    }

    #[test]
    fn default_rotate_is_unsupported() {
        let mut rule = Inert;
        let mut lattice =
            Lattice::new(Box::new(SquareGrid::new(2, 2, EdgeRule::Absorb).unwrap()));
        let err = rule.rotate(&mut lattice, Coord::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            RuleError::UnsupportedOperation {
                rule: "inert".into()
            }
        );
    }
}
