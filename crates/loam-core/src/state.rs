//! Discrete cell states.

use std::fmt;

/// A small enumerated integer identifying a cell's discrete condition.
///
/// The meaning of each code is defined per rule set (for Fire:
/// empty = 0, tree = 1, burning = 2). The lattice stores codes without
/// interpreting them; rule sets declare the codes they own via
/// `RuleSet::states()` and the engine validates population weights
/// against that list at construction time. Renderers map codes to
/// colours externally — no visual metadata lives in the core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateCode(pub u8);

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for StateCode {
    fn from(v: u8) -> Self {
        Self(v)
    }
}
