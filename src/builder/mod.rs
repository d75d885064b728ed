//! Builder API for constructing automata by hand.
//!
//! The fluent [`AutomatonBuilder`] checks the descriptor and table against
//! each other before handing out an [`Automaton`](crate::core::Automaton);
//! the [`transitions!`](crate::transitions) and
//! [`automaton!`](crate::automaton) macros cover literal tables in tests and
//! examples.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;

use crate::core::{Automaton, EngineConfig};
use crate::parser::{self, ParseError};

/// Parse a description and switch it to the given engine configuration.
///
/// # Example
///
/// ```
/// use dfa_sim::builder::from_description;
/// use dfa_sim::core::EngineConfig;
///
/// let text = "P=({q0,q1},{a,ab,b},Prog,q0,{q1})\nProg\n(q0,a)=q0(q0,b)=q1";
/// let automaton = from_description(text, EngineConfig::declaration_order()).unwrap();
///
/// assert_eq!(automaton.tokenize("ab").unwrap(), vec!["a", "b"]);
/// ```
pub fn from_description(text: &str, config: EngineConfig) -> Result<Automaton, ParseError> {
    let (descriptor, table) = parser::parse(text)?;
    Ok(Automaton::with_config(descriptor, table, config))
}
