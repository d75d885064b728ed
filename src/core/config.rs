//! Engine configuration.

use serde::{Deserialize, Serialize};

/// How the tokenizer chooses between alphabet symbols that are prefixes of
/// one another (for example `a` and `ab`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Prefer the longest symbol matching at the current position. Symbols of
    /// equal length keep their declaration order.
    #[default]
    LongestMatch,

    /// Take the first matching symbol in alphabet declaration order.
    DeclarationOrder,
}

/// Configuration carried by an [`Automaton`](crate::core::Automaton).
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::{EngineConfig, MatchStrategy};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.match_strategy, MatchStrategy::LongestMatch);
///
/// let legacy = EngineConfig::declaration_order();
/// assert_eq!(legacy.match_strategy, MatchStrategy::DeclarationOrder);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tie-break used when several alphabet symbols match at one position.
    #[serde(default)]
    pub match_strategy: MatchStrategy,
}

impl EngineConfig {
    /// Config that tries symbols strictly in alphabet order.
    pub fn declaration_order() -> Self {
        Self {
            match_strategy: MatchStrategy::DeclarationOrder,
        }
    }

    /// Return a copy with a different match strategy.
    pub fn with_match_strategy(mut self, match_strategy: MatchStrategy) -> Self {
        self.match_strategy = match_strategy;
        self
    }
}
