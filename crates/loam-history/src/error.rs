//! Error types for the history log.

use std::fmt;

/// Errors raised by history navigation.
#[derive(Debug, PartialEq, Eq)]
pub enum HistoryError {
    /// A rewind was requested at generation 0, before which nothing
    /// exists.
    NoHistory,
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHistory => write!(f, "no earlier generation to rewind to"),
        }
    }
}

impl std::error::Error for HistoryError {}
