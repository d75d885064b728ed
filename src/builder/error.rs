//! Build errors for the automaton builder.

use crate::validation::ConsistencyError;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Automaton name not specified. Call .name(name) before .build()")]
    MissingName,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Automaton is inconsistent: {}", summarize(.0))]
    Inconsistent(Vec<ConsistencyError>),
}

fn summarize(errors: &[ConsistencyError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
