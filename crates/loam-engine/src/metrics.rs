//! Per-simulation step metrics.

/// Counters describing a simulation's stepping activity.
///
/// The engine updates these after every operation; consumers read them
/// from [`Simulation::metrics`](crate::Simulation::metrics). This is
/// the engine's whole observability surface — there is no logging
/// framework underneath.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// The generation the simulation currently shows.
    pub generation: u64,
    /// Cells whose state changed in the most recent computed commit.
    /// Unchanged by replayed or rewound steps.
    pub cells_changed: usize,
    /// Cumulative steps that ran the rule set.
    pub computed_steps: u64,
    /// Cumulative forward steps served from cached history.
    pub replayed_steps: u64,
    /// Cumulative backward steps.
    pub rewound_steps: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.generation, 0);
        assert_eq!(m.cells_changed, 0);
        assert_eq!(m.computed_steps, 0);
        assert_eq!(m.replayed_steps, 0);
        assert_eq!(m.rewound_steps, 0);
    }
}
