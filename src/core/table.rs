//! Transition table: a partial function from `(state, symbol)` to state.

use indexmap::{Equivalent, IndexMap};
use serde::{Deserialize, Serialize};

/// A single `(from, symbol) -> to` entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: String,
    pub symbol: String,
    pub to: String,
}

impl Transition {
    pub fn new(from: impl Into<String>, symbol: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Key {
    state: String,
    symbol: String,
}

/// Borrowed form of [`Key`]; hashes identically so lookups need no
/// allocation.
#[derive(Hash)]
struct KeyRef<'a> {
    state: &'a str,
    symbol: &'a str,
}

impl Equivalent<Key> for KeyRef<'_> {
    fn equivalent(&self, key: &Key) -> bool {
        self.state == key.state && self.symbol == key.symbol
    }
}

/// Insertion-ordered transition table.
///
/// The table may be partial; a missing entry is a rejection at simulation
/// time, not a construction error. Inserting an existing key overwrites the
/// target and keeps the key's original position.
///
/// # Example
///
/// ```rust
/// use dfa_sim::core::TransitionTable;
///
/// let mut table = TransitionTable::new();
/// table.insert("q0", "a", "q1");
/// table.insert("q0", "a", "q2");
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get("q0", "a"), Some("q2"));
/// assert_eq!(table.get("q0", "b"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Transition>", into = "Vec<Transition>")]
pub struct TransitionTable {
    entries: IndexMap<Key, String>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the target it replaced, if any.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        symbol: impl Into<String>,
        to: impl Into<String>,
    ) -> Option<String> {
        let key = Key {
            state: from.into(),
            symbol: symbol.into(),
        };
        self.entries.insert(key, to.into())
    }

    /// Look up the target of `(state, symbol)`.
    pub fn get(&self, state: &str, symbol: &str) -> Option<&str> {
        self.entries
            .get(&KeyRef { state, symbol })
            .map(String::as_str)
    }

    pub fn contains(&self, state: &str, symbol: &str) -> bool {
        self.get(state, symbol).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as `(from, symbol, to)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, to)| (key.state.as_str(), key.symbol.as_str(), to.as_str()))
    }

    /// Render one `(state,symbol)=next` line per entry, each ending in `\n`.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(from, symbol, to)| format!("({from},{symbol})={to}\n"))
            .collect()
    }
}

impl<F, S, T> FromIterator<(F, S, T)> for TransitionTable
where
    F: Into<String>,
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (F, S, T)>>(iter: It) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<F, S, T> Extend<(F, S, T)> for TransitionTable
where
    F: Into<String>,
    S: Into<String>,
    T: Into<String>,
{
    fn extend<It: IntoIterator<Item = (F, S, T)>>(&mut self, iter: It) {
        for (from, symbol, to) in iter {
            self.insert(from, symbol, to);
        }
    }
}

impl From<Vec<Transition>> for TransitionTable {
    fn from(transitions: Vec<Transition>) -> Self {
        transitions
            .into_iter()
            .map(|t| (t.from, t.symbol, t.to))
            .collect()
    }
}

impl From<TransitionTable> for Vec<Transition> {
    fn from(table: TransitionTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(key, to)| Transition {
                from: key.state,
                symbol: key.symbol,
                to,
            })
            .collect()
    }
}
