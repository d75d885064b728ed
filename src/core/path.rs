//! Trace of a single simulation run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Alternating sequence `state, symbol, state, ...` walked by one
/// acceptance check.
///
/// A path always starts and ends with a state, so it has odd length.
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::{Automaton, Descriptor, TransitionTable};
///
/// let descriptor = Descriptor::new("M", ["q0", "q1"], ["a", "b"], "q0", ["q1"]);
/// let table: TransitionTable = [("q0", "a", "q1"), ("q1", "b", "q1")].into_iter().collect();
/// let automaton = Automaton::new(descriptor, table);
///
/// let result = automaton.accepts("ab").unwrap();
/// let path = result.path().unwrap();
///
/// assert_eq!(path.states().collect::<Vec<_>>(), ["q0", "q1", "q1"]);
/// assert_eq!(path.symbols().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(path.to_string(), "q0 -a-> q1 -b-> q1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<String>,
}

impl Path {
    pub(crate) fn start(initial: &str) -> Self {
        Self {
            steps: vec![initial.to_owned()],
        }
    }

    pub(crate) fn push(&mut self, step: &str) {
        self.steps.push(step.to_owned());
    }

    /// States visited, initial state first.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().step_by(2).map(String::as_str)
    }

    /// Symbols consumed, in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().skip(1).step_by(2).map(String::as_str)
    }

    pub fn last_state(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.steps
    }

    pub fn into_vec(self) -> Vec<String> {
        self.steps
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states = self.states();
        if let Some(first) = states.next() {
            write!(f, "{first}")?;
        }
        for (symbol, state) in self.symbols().zip(states) {
            write!(f, " -{symbol}-> {state}")?;
        }
        Ok(())
    }
}

impl PartialEq<[&str]> for Path {
    fn eq(&self, other: &[&str]) -> bool {
        self.steps.len() == other.len() && self.steps.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Path {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
