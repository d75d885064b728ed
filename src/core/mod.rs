//! Core automaton types and the simulation engine.
//!
//! - [`Descriptor`]: name, states, alphabet, initial and final states
//! - [`TransitionTable`]: partial `(state, symbol) -> state` function
//! - [`Automaton`]: the two combined, with tokenization and acceptance
//! - [`Path`]: the trace of one accepted run
//!
//! Everything here is an immutable value once built.

mod automaton;
mod config;
mod descriptor;
mod path;
mod table;

pub use automaton::{AcceptanceResult, Automaton, Rejection, TokenizeError};
pub use config::{EngineConfig, MatchStrategy};
pub use descriptor::Descriptor;
pub use path::Path;
pub use table::{Transition, TransitionTable};
