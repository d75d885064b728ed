//! Parser for the textual automaton description language.
//!
//! A description is a descriptor line, a separator line and a transition
//! body:
//!
//! ```text
//! M=({q0,q1},{a,b},Prog,q0,{q1})
//! Prog
//! (q0,a)=q1
//! (q1,b)=q1
//! ```
//!
//! Parsing runs in two stages. The [`Lexer`] turns text into a flat list of
//! tokens; the structural extractors then check arity and shape before any
//! field is assigned. All functions here are pure.

pub mod descriptor;
pub mod error;
pub mod lexer;
pub mod transitions;

pub use descriptor::parse_descriptor;
pub use error::ParseError;
pub use lexer::{lex, Lexer, Token, TokenKind};
pub use transitions::parse_transition_table;

use crate::core::{Automaton, Descriptor, TransitionTable};

/// Parse a full description into its descriptor and transition table.
///
/// Line 0 is the descriptor, line 1 is a separator that is ignored, and all
/// later lines are joined without a separator to form the transition body.
/// The two halves are not checked against each other.
///
/// # Example
///
/// ```rust
/// use dfa_sim::parser::parse;
///
/// let text = "M=({q0,q1},{a,b},Prog,q0,{q1})\nProg\n(q0,a)=q1\n(q1,b)=q1\n";
/// let (descriptor, table) = parse(text).unwrap();
///
/// assert_eq!(descriptor.name(), "M");
/// assert_eq!(table.get("q1", "b"), Some("q1"));
/// ```
pub fn parse(full_text: &str) -> Result<(Descriptor, TransitionTable), ParseError> {
    let lines: Vec<&str> = full_text.split('\n').collect();
    if lines.len() < 2 {
        return Err(ParseError::EmptyInput { lines: lines.len() });
    }

    let descriptor = parse_descriptor(lines[0])?;
    let table = parse_transition_table(&lines[2..].concat())?;
    Ok((descriptor, table))
}

/// Parse a full description straight into an [`Automaton`] with the default
/// configuration.
pub fn parse_automaton(full_text: &str) -> Result<Automaton, ParseError> {
    let (descriptor, table) = parse(full_text)?;
    Ok(Automaton::new(descriptor, table))
}
