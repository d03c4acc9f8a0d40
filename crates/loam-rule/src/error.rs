//! Error types for rule-set execution.

use std::fmt;

/// Errors from rule-set execution or manual cell operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A rule set's step failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The rule set defines no manual state rotation.
    UnsupportedOperation {
        /// Name of the rule set that rejected the operation.
        rule: String,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
            Self::UnsupportedOperation { rule } => {
                write!(f, "rule set '{rule}' supports no manual state rotation")
            }
        }
    }
}

impl std::error::Error for RuleError {}
