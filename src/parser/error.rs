//! Parse errors for automaton descriptions.

use thiserror::Error;

/// Errors that can occur while parsing an automaton description.
///
/// Offsets are byte offsets into the fragment being parsed: the descriptor
/// line, or the concatenated transition body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Description needs a descriptor line and a separator line, found {lines} line(s)")]
    EmptyInput { lines: usize },

    #[error("Malformed descriptor at offset {offset}: expected {expected}, found {found}")]
    MalformedDescriptor {
        offset: usize,
        expected: String,
        found: String,
    },

    #[error("Malformed transition #{entry} at offset {offset}: expected {expected}, found {found}")]
    MalformedTransition {
        entry: usize,
        offset: usize,
        expected: String,
        found: String,
    },
}
