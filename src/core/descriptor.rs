//! Static identity of an automaton.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Name, states, alphabet, initial state and final states of an automaton.
///
/// Sets keep insertion order so rendering and tokenization are
/// deterministic. Equality compares them as sets. The descriptor does not
/// check that `initial_state` and `final_states` belong to `states`; see
/// [`validation`](crate::validation) for that.
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::Descriptor;
///
/// let descriptor = Descriptor::new("M", ["q0", "q1"], ["a", "b"], "q0", ["q1"]);
///
/// assert_eq!(descriptor.name(), "M");
/// assert!(descriptor.is_final("q1"));
/// assert!(!descriptor.is_final("q0"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    name: String,
    states: IndexSet<String>,
    alphabet: IndexSet<String>,
    initial_state: String,
    final_states: IndexSet<String>,
}

impl Descriptor {
    pub fn new<N, S, A, I, F>(
        name: N,
        states: S,
        alphabet: A,
        initial_state: I,
        final_states: F,
    ) -> Self
    where
        N: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        I: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            name: name.into(),
            states: states.into_iter().map(Into::into).collect(),
            alphabet: alphabet.into_iter().map(Into::into).collect(),
            initial_state: initial_state.into(),
            final_states: final_states.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn states(&self) -> &IndexSet<String> {
        &self.states
    }

    pub fn alphabet(&self) -> &IndexSet<String> {
        &self.alphabet
    }

    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    pub fn final_states(&self) -> &IndexSet<String> {
        &self.final_states
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.contains(symbol)
    }

    pub fn is_final(&self, state: &str) -> bool {
        self.final_states.contains(state)
    }

    /// Render the descriptor line, e.g. `M=({q0,q1},{a,b},Prog,q0,{q1})`.
    pub fn render(&self) -> String {
        format!(
            "{}=({},{},Prog,{},{})",
            self.name,
            render_set(&self.states),
            render_set(&self.alphabet),
            self.initial_state,
            render_set(&self.final_states),
        )
    }
}

fn render_set(set: &IndexSet<String>) -> String {
    let items: Vec<&str> = set.iter().map(String::as_str).collect();
    format!("{{{}}}", items.join(","))
}
