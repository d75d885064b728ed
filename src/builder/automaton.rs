//! Builder for constructing automata by hand.

use crate::builder::error::BuildError;
use crate::core::{Automaton, Descriptor, EngineConfig, TransitionTable};
use crate::validation;
use indexmap::IndexSet;

/// Builder for constructing automata with a fluent API.
///
/// Unlike [`Automaton::new`], [`build`](Self::build) checks that every name
/// can be written back as a description, that the initial and final states
/// are declared and that every transition uses declared states and symbols.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    name: Option<String>,
    states: IndexSet<String>,
    alphabet: IndexSet<String>,
    initial: Option<String>,
    finals: IndexSet<String>,
    table: TransitionTable,
    config: EngineConfig,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the automaton name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Declare several states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare alphabet symbols, in the order the tokenizer should see them.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Mark a state as final.
    pub fn final_state(mut self, state: impl Into<String>) -> Self {
        self.finals.insert(state.into());
        self
    }

    /// Mark several states as final.
    pub fn final_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.finals.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition. A repeated `(from, symbol)` overwrites the earlier
    /// target.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.table.insert(from, symbol, to);
        self
    }

    /// Add every entry of a prebuilt table.
    pub fn transitions(mut self, table: TransitionTable) -> Self {
        self.table.extend(
            table
                .iter()
                .map(|(from, symbol, to)| (from.to_owned(), symbol.to_owned(), to.to_owned())),
        );
        self
    }

    /// Set the engine configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing or the pieces
    /// disagree with each other.
    pub fn build(self) -> Result<Automaton, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let descriptor = Descriptor::new(name, self.states, self.alphabet, initial, self.finals);
        validation::ensure_consistent(&descriptor, &self.table)
            .map_err(BuildError::Inconsistent)?;

        Ok(Automaton::with_config(descriptor, self.table, self.config))
    }
}
