//! Execution context passed to rule sets during a step.

use loam_core::Generation;
use loam_grid::Lattice;
use rand_chacha::ChaCha8Rng;

/// Execution context for one [`RuleSet::step`](crate::RuleSet::step).
///
/// Bundles the lattice (current state readable, pending writable), the
/// simulation's seeded random stream, and the generation being
/// computed. The random stream is the engine-owned handle injected at
/// construction; rule sets never reach for ambient randomness, which is
/// what makes a run reproducible from its seed.
pub struct StepContext<'a> {
    lattice: &'a mut Lattice,
    rng: &'a mut ChaCha8Rng,
    generation: Generation,
}

impl<'a> StepContext<'a> {
    /// Construct a step context. Called by the engine; tests build one
    /// directly around a hand-made lattice.
    pub fn new(lattice: &'a mut Lattice, rng: &'a mut ChaCha8Rng, generation: Generation) -> Self {
        Self {
            lattice,
            rng,
            generation,
        }
    }

    /// The lattice: read `state`, write `pending`.
    pub fn lattice(&mut self) -> &mut Lattice {
        self.lattice
    }

    /// Read-only lattice access.
    pub fn lattice_ref(&self) -> &Lattice {
        self.lattice
    }

    /// The simulation's random stream.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.rng
    }

    /// Split borrow: lattice and RNG at once.
    ///
    /// Rule sets routinely pick a random neighbour while holding the
    /// lattice, which the single-accessor methods cannot express.
    pub fn parts(&mut self) -> (&mut Lattice, &mut ChaCha8Rng) {
        (self.lattice, self.rng)
    }

    /// The generation being computed (the one `commit` will publish).
    pub fn generation(&self) -> Generation {
        self.generation
    }
}
