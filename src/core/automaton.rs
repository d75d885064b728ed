//! The automaton engine: tokenization, acceptance and rendering.

use crate::core::config::{EngineConfig, MatchStrategy};
use crate::core::descriptor::Descriptor;
use crate::core::path::Path;
use crate::core::table::TransitionTable;
use crate::validation::{self, ConsistencyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised while splitting a word into alphabet symbols.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Word '{word}' contains characters outside the alphabet: '{residue}'")]
    InvalidSymbol { word: String, residue: String },
}

/// Why a run did not accept its word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// No table entry for `(state, symbol)`.
    UndefinedTransition { state: String, symbol: String },

    /// The word was consumed but the run stopped outside the final states.
    NonFinalState { state: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedTransition { state, symbol } => write!(
                f,
                "Program ended with undefined state at state {state} with element {symbol}."
            ),
            Self::NonFinalState { state } => {
                write!(f, "Program ended on non-final state {state}.")
            }
        }
    }
}

/// Outcome of a single acceptance check.
///
/// Rejection is an ordinary value, distinct from [`TokenizeError`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptanceResult {
    /// The run ended in a final state.
    Accepted { path: Path },

    /// The run was rejected.
    Rejected { reason: Rejection },
}

impl AcceptanceResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Accepted { path } => Some(path),
            Self::Rejected { .. } => None,
        }
    }

    /// Human-readable rejection reason, if the word was rejected.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason } => Some(reason.to_string()),
        }
    }
}

/// A deterministic finite automaton.
///
/// Immutable once constructed; every query takes `&self`, so an automaton can
/// be shared across threads without locking.
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
/// assert!(automaton.accepts("abb").unwrap().is_accepted());
/// assert_eq!(
///     automaton.accepts("").unwrap().reason().as_deref(),
///     Some("Program ended on non-final state q0."),
/// );
/// assert!(automaton.accepts("ac").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    descriptor: Descriptor,
    table: TransitionTable,
    #[serde(default)]
    config: EngineConfig,
}

impl Automaton {
    /// Build an automaton with the default configuration.
    ///
    /// No consistency check is made between descriptor and table; call
    /// [`validate`](Self::validate) or use the
    /// [`AutomatonBuilder`](crate::builder::AutomatonBuilder) for that.
    pub fn new(descriptor: Descriptor, table: TransitionTable) -> Self {
        Self::with_config(descriptor, table, EngineConfig::default())
    }

    pub fn with_config(
        descriptor: Descriptor,
        table: TransitionTable,
        config: EngineConfig,
    ) -> Self {
        debug!(
            name = descriptor.name(),
            states = descriptor.states().len(),
            symbols = descriptor.alphabet().len(),
            transitions = table.len(),
            strategy = ?config.match_strategy,
            "automaton constructed"
        );
        Self {
            descriptor,
            table,
            config,
        }
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn into_parts(self) -> (Descriptor, TransitionTable) {
        (self.descriptor, self.table)
    }

    /// Check the descriptor and table against each other, collecting every
    /// inconsistency.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConsistencyError>> {
        validation::validate(&self.descriptor, &self.table)
    }

    /// Split `word` into alphabet symbols, left to right.
    ///
    /// The whole word is scanned before failing, so the error reports every
    /// character no symbol covers.
    pub fn tokenize(&self, word: &str) -> Result<Vec<String>, TokenizeError> {
        let candidates = self.candidates();
        let mut symbols = Vec::new();
        let mut residue = String::new();
        let mut rest = word;

        while let Some(next) = rest.chars().next() {
            match candidates.iter().find(|symbol| rest.starts_with(**symbol)) {
                Some(symbol) => {
                    symbols.push((*symbol).to_owned());
                    rest = &rest[symbol.len()..];
                }
                None => {
                    residue.push(next);
                    rest = &rest[next.len_utf8()..];
                }
            }
        }

        if !residue.is_empty() {
            return Err(TokenizeError::InvalidSymbol {
                word: word.to_owned(),
                residue,
            });
        }
        Ok(symbols)
    }

    /// Alphabet symbols in the order the tokenizer tries them.
    fn candidates(&self) -> Vec<&str> {
        let mut candidates: Vec<&str> = self
            .descriptor
            .alphabet()
            .iter()
            .map(String::as_str)
            .filter(|symbol| !symbol.is_empty())
            .collect();
        if self.config.match_strategy == MatchStrategy::LongestMatch {
            // stable: equal lengths keep declaration order
            candidates.sort_by(|a, b| b.len().cmp(&a.len()));
        }
        candidates
    }

    /// Run the automaton on `word`.
    ///
    /// Returns `Err` only when the word cannot be tokenized; rejection is an
    /// `Ok(AcceptanceResult::Rejected { .. })`.
    pub fn accepts(&self, word: &str) -> Result<AcceptanceResult, TokenizeError> {
        let symbols = self.tokenize(word)?;
        let mut current = self.descriptor.initial_state();
        let mut path = Path::start(current);

        for symbol in &symbols {
            path.push(symbol);
            let Some(next) = self.table.get(current, symbol) else {
                debug!(word, state = current, symbol = %symbol, "undefined transition");
                return Ok(AcceptanceResult::Rejected {
                    reason: Rejection::UndefinedTransition {
                        state: current.to_owned(),
                        symbol: symbol.clone(),
                    },
                });
            };
            trace!(from = current, symbol = %symbol, to = next, "step");
            current = next;
            path.push(current);
        }

        if !self.descriptor.is_final(current) {
            debug!(word, state = current, "ended on non-final state");
            return Ok(AcceptanceResult::Rejected {
                reason: Rejection::NonFinalState {
                    state: current.to_owned(),
                },
            });
        }
        Ok(AcceptanceResult::Accepted { path })
    }

    /// Run [`accepts`](Self::accepts) over a batch of words, keeping order.
    pub fn accepts_all<'w, I>(&self, words: I) -> Vec<Result<AcceptanceResult, TokenizeError>>
    where
        I: IntoIterator<Item = &'w str>,
    {
        words.into_iter().map(|word| self.accepts(word)).collect()
    }

    /// Textual form accepted by [`parse`](crate::parser::parse): the
    /// descriptor line, a `Prog` separator, then one line per transition.
    pub fn render(&self) -> String {
        format!("{}\nProg\n{}", self.descriptor.render(), self.table.render())
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Automaton {
        let descriptor = Descriptor::new("M", ["q0", "q1"], ["a", "b"], "q0", ["q1"]);
        let table: TransitionTable = [("q0", "a", "q1"), ("q1", "b", "q1")].into_iter().collect();
        Automaton::new(descriptor, table)
    }

    fn prefixed(config: EngineConfig) -> Automaton {
        let descriptor = Descriptor::new("P", ["q0", "q1"], ["a", "ab", "b"], "q0", ["q1"]);
        let table: TransitionTable = [("q0", "ab", "q1"), ("q0", "a", "q0"), ("q0", "b", "q1")]
            .into_iter()
            .collect();
        Automaton::with_config(descriptor, table, config)
    }

    #[test]
    fn accepts_single_symbol() {
        let result = scenario().accepts("a").unwrap();
        assert_eq!(result.path().unwrap(), &["q0", "a", "q1"]);
    }

    #[test]
    fn accepts_with_self_loop() {
        let result = scenario().accepts("ab").unwrap();
        assert_eq!(result.path().unwrap(), &["q0", "a", "q1", "b", "q1"]);
    }

    #[test]
    fn rejects_undefined_transition_reporting_prior_state() {
        let result = scenario().accepts("b").unwrap();
        assert_eq!(
            result,
            AcceptanceResult::Rejected {
                reason: Rejection::UndefinedTransition {
                    state: "q0".to_string(),
                    symbol: "b".to_string(),
                }
            }
        );
        assert_eq!(
            result.reason().unwrap(),
            "Program ended with undefined state at state q0 with element b."
        );
    }

    #[test]
    fn rejects_empty_word_on_non_final_initial() {
        let result = scenario().accepts("").unwrap();
        assert_eq!(
            result.reason().unwrap(),
            "Program ended on non-final state q0."
        );
        assert!(result.path().is_none());
    }

    #[test]
    fn invalid_symbol_is_an_error_not_a_rejection() {
        let err = scenario().accepts("ac").unwrap_err();
        assert_eq!(
            err,
            TokenizeError::InvalidSymbol {
                word: "ac".to_string(),
                residue: "c".to_string(),
            }
        );
    }

    #[test]
    fn tokenize_collects_all_residue() {
        let err = scenario().tokenize("xaby").unwrap_err();
        assert!(matches!(
            err,
            TokenizeError::InvalidSymbol { ref residue, .. } if residue == "xy"
        ));
    }

    #[test]
    fn tokenize_handles_multi_character_symbols() {
        let descriptor = Descriptor::new("W", ["s"], ["go", "stop"], "s", ["s"]);
        let automaton = Automaton::new(descriptor, TransitionTable::new());
        assert_eq!(
            automaton.tokenize("gostopgo").unwrap(),
            vec!["go", "stop", "go"]
        );
    }

    #[test]
    fn longest_match_prefers_longer_symbol() {
        let automaton = prefixed(EngineConfig::default());
        assert_eq!(automaton.tokenize("ab").unwrap(), vec!["ab"]);
        assert!(automaton.accepts("ab").unwrap().is_accepted());
    }

    #[test]
    fn declaration_order_takes_first_listed_symbol() {
        let automaton = prefixed(EngineConfig::declaration_order());
        assert_eq!(automaton.tokenize("ab").unwrap(), vec!["a", "b"]);
        assert_eq!(
            automaton.accepts("ab").unwrap().path().unwrap(),
            &["q0", "a", "q0", "b", "q1"]
        );
    }

    #[test]
    fn empty_alphabet_symbol_never_matches() {
        let descriptor = Descriptor::new("E", ["q0"], ["", "a"], "q0", ["q0"]);
        let automaton = Automaton::new(descriptor, TransitionTable::new());
        assert_eq!(automaton.tokenize("").unwrap(), Vec::<String>::new());
        assert!(automaton.tokenize("b").is_err());
    }

    #[test]
    fn undefined_target_state_surfaces_at_runtime() {
        let descriptor = Descriptor::new("M", ["q0"], ["a"], "q0", ["q0"]);
        let table: TransitionTable = [("q0", "a", "ghost")].into_iter().collect();
        let automaton = Automaton::new(descriptor, table);

        assert_eq!(
            automaton.accepts("a").unwrap().reason().unwrap(),
            "Program ended on non-final state ghost."
        );
        assert_eq!(
            automaton.accepts("aa").unwrap().reason().unwrap(),
            "Program ended with undefined state at state ghost with element a."
        );
    }

    #[test]
    fn accepts_is_deterministic() {
        let automaton = scenario();
        for word in ["", "a", "ab", "b", "abbb"] {
            assert_eq!(automaton.accepts(word), automaton.accepts(word));
        }
    }

    #[test]
    fn accepts_all_preserves_order() {
        let results = scenario().accepts_all(["a", "b", "ac"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].as_ref().unwrap().is_accepted());
        assert!(!results[1].as_ref().unwrap().is_accepted());
        assert!(results[2].is_err());
    }

    #[test]
    fn render_produces_description_text() {
        assert_eq!(
            scenario().render(),
            "M=({q0,q1},{a,b},Prog,q0,{q1})\nProg\n(q0,a)=q1\n(q1,b)=q1\n"
        );
        assert_eq!(scenario().to_string(), scenario().render());
    }

    #[test]
    fn automaton_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton>();
    }
}
