//! dfa-sim: deterministic finite automata from a textual description.
//!
//! An automaton is described by one descriptor line, a separator line and a
//! transition body:
//!
//! ```text
//! M=({q0,q1},{a,b},Prog,q0,{q1})
//! Prog
//! (q0,a)=q1
//! (q1,b)=q1
//! ```
//!
//! # Core Concepts
//!
//! - **Parser**: pure functions from text to a [`Descriptor`] and a
//!   [`TransitionTable`]
//! - **Automaton**: immutable engine that tokenizes words against the
//!   alphabet and walks the table
//! - **AcceptanceResult**: an accepted run with its [`Path`], or a rejection
//!   with its reason; rejection is a value, not an error
//! - **Validation**: opt-in cross-check between descriptor and table
//! - **Snapshots**: versioned JSON and binary persistence
//!
//! # Example
//!
//! ```rust
//! use dfa_sim::parser::parse_automaton;
//! use dfa_sim::AcceptanceResult;
//!
//! let text = "M=({q0,q1},{a,b},Prog,q0,{q1})\nProg\n(q0,a)=q1\n(q1,b)=q1\n";
//! let automaton = parse_automaton(text).unwrap();
//!
//! match automaton.accepts("ab").unwrap() {
//!     AcceptanceResult::Accepted { path } => {
//!         assert_eq!(path, ["q0", "a", "q1", "b", "q1"]);
//!     }
//!     AcceptanceResult::Rejected { reason } => panic!("rejected: {reason}"),
//! }
//!
//! let rejected = automaton.accepts("b").unwrap();
//! assert_eq!(
//!     rejected.reason().unwrap(),
//!     "Program ended with undefined state at state q0 with element b."
//! );
//! ```

pub mod builder;
pub mod core;
pub mod parser;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use core::{
    AcceptanceResult, Automaton, Descriptor, EngineConfig, MatchStrategy, Path, Rejection,
    TokenizeError, TransitionTable,
};
pub use parser::{parse, parse_automaton, ParseError};
