//! Reference rule sets for the Loam cellular-automaton engine.
//!
//! Five automata, one module each:
//!
//! - [`FireRule`] — probabilistic forest-fire spread (cardinal only)
//! - [`LifeRule`] — life-like boolean automaton
//! - [`WatorRule`] — predator-prey ecology with breeding
//! - [`SegregationRule`] — satisfaction-driven relocation
//! - [`RpsRule`] — rock-paper-scissors with gradient memory
//!
//! All randomness flows through the seeded stream in the
//! [`StepContext`](loam_rule::StepContext); none of these rule sets
//! touches ambient RNG state, so a run is reproducible from its seed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fire;
pub mod life;
pub mod rps;
pub mod segregation;
pub mod wator;

pub use fire::FireRule;
pub use life::LifeRule;
pub use rps::RpsRule;
pub use segregation::SegregationRule;
pub use wator::WatorRule;
