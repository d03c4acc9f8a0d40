//! Reusable scripted rule sets.
//!
//! Three standard rule sets for engine and history testing:
//!
//! - [`ConstRule`] — stages a constant state everywhere.
//! - [`CyclingRule`] — increments every cell's state modulo a period,
//!   giving each generation a distinct, predictable grid.
//! - [`FailingRule`] — fails deterministically after N steps.

use loam_core::StateCode;
use loam_rule::{RuleError, RuleSet, StepContext};
use loam_grid::PendingSeed;

/// Stages a constant state into every cell (Fill seed, no reads).
pub struct ConstRule {
    pub value: StateCode,
}

impl ConstRule {
    pub fn new(value: StateCode) -> Self {
        Self { value }
    }
}

impl RuleSet for ConstRule {
    fn name(&self) -> &str {
        "const"
    }

    fn states(&self) -> &'static [StateCode] {
        const STATES: [StateCode; 4] = [StateCode(0), StateCode(1), StateCode(2), StateCode(3)];
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let lattice = ctx.lattice();
        for coord in lattice.coords() {
            lattice.set_pending(coord, self.value);
        }
        Ok(())
    }
}

/// Increments every cell's state modulo `period` each step.
///
/// Generation `g` from an all-zero start paints every cell with
/// `g % period`, so history tests can tell generations apart at a
/// glance.
pub struct CyclingRule {
    pub period: u8,
}

impl CyclingRule {
    pub fn new(period: u8) -> Self {
        assert!(period > 0, "period must be positive");
        Self { period }
    }
}

impl RuleSet for CyclingRule {
    fn name(&self) -> &str {
        "cycling"
    }

    fn states(&self) -> &'static [StateCode] {
        const STATES: [StateCode; 4] = [StateCode(0), StateCode(1), StateCode(2), StateCode(3)];
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let period = self.period;
        let lattice = ctx.lattice();
        for coord in lattice.coords() {
            let next = (lattice.state(coord).0 + 1) % period;
            lattice.set_pending(coord, StateCode(next));
        }
        Ok(())
    }
}

/// Succeeds `succeed_count` times, then fails every call.
pub struct FailingRule {
    pub succeed_count: usize,
    calls: usize,
}

impl FailingRule {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `step()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl RuleSet for FailingRule {
    fn name(&self) -> &str {
        "failing"
    }

    fn states(&self) -> &'static [StateCode] {
        const STATES: [StateCode; 1] = [StateCode(0)];
        &STATES
    }

    fn pending_seed(&self) -> PendingSeed {
        PendingSeed::Copy
    }

    fn step(&mut self, _ctx: &mut StepContext<'_>) -> Result<(), RuleError> {
        let n = self.calls;
        self.calls += 1;
        if n >= self.succeed_count {
            return Err(RuleError::ExecutionFailed {
                reason: format!("deliberate failure after {} successful steps", self.succeed_count),
            });
        }
        Ok(())
    }
}
