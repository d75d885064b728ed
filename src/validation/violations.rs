//! Inconsistencies between a descriptor and its transition table.

use thiserror::Error;

/// A single way in which a descriptor and a transition table disagree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("Initial state '{state}' is not in the state set")]
    UnknownInitialState { state: String },

    #[error("Final state '{state}' is not in the state set")]
    UnknownFinalState { state: String },

    #[error("Transition ({state},{symbol}) starts from unknown state '{state}'")]
    UnknownSourceState { state: String, symbol: String },

    #[error("Transition ({from},{symbol}) leads to unknown state '{state}'")]
    UnknownTargetState {
        from: String,
        symbol: String,
        state: String,
    },

    #[error("Transition ({state},{symbol}) uses symbol '{symbol}' outside the alphabet")]
    UnknownSymbol { state: String, symbol: String },

    #[error(
        "Name '{name}' cannot be written in a description: it must be non-empty \
         with no whitespace and none of {{ }} ( ) , ="
    )]
    InvalidName { name: String },
}
