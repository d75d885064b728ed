//! Consistency checks between a descriptor and its transition table.
//!
//! Parsing never cross-checks the two halves of a description; a transition
//! to an unknown state only shows up when a run reaches it. These checks are
//! opt-in and use Stillwater's `Validation` to report every problem in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use dfa_sim::core::{Descriptor, TransitionTable};
//! use dfa_sim::validation::{validate, ConsistencyError};
//! use stillwater::validation::Validation;
//!
//! let descriptor = Descriptor::new("M", ["q0"], ["a"], "q9", ["q0"]);
//! let table: TransitionTable = [("q0", "z", "q0")].into_iter().collect();
//!
//! match validate(&descriptor, &table) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("expected inconsistencies"),
//! }
//! ```

pub mod violations;

pub use violations::ConsistencyError;

use crate::core::{Descriptor, TransitionTable};
use crate::parser::lexer::is_identifier;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConsistencyError>>;

/// Check that every name can be written back as a description, that the
/// initial and final states belong to the state set and that every
/// transition uses known states and alphabet symbols.
pub fn validate(
    descriptor: &Descriptor,
    table: &TransitionTable,
) -> Validation<(), NonEmptyVec<ConsistencyError>> {
    let mut checks: Vec<Check> = Vec::new();

    // Initial, final and table names are either declared here or reported
    // as unknown below.
    let names = std::iter::once(descriptor.name())
        .chain(descriptor.states().iter().map(String::as_str))
        .chain(descriptor.alphabet().iter().map(String::as_str));
    for name in names {
        checks.push(require(is_identifier(name), || {
            ConsistencyError::InvalidName {
                name: name.to_owned(),
            }
        }));
    }

    checks.push(require(
        descriptor.has_state(descriptor.initial_state()),
        || ConsistencyError::UnknownInitialState {
            state: descriptor.initial_state().to_owned(),
        },
    ));

    for state in descriptor.final_states() {
        checks.push(require(descriptor.has_state(state), || {
            ConsistencyError::UnknownFinalState {
                state: state.clone(),
            }
        }));
    }

    for (from, symbol, to) in table.iter() {
        checks.push(require(descriptor.has_state(from), || {
            ConsistencyError::UnknownSourceState {
                state: from.to_owned(),
                symbol: symbol.to_owned(),
            }
        }));
        checks.push(require(descriptor.has_symbol(symbol), || {
            ConsistencyError::UnknownSymbol {
                state: from.to_owned(),
                symbol: symbol.to_owned(),
            }
        }));
        checks.push(require(descriptor.has_state(to), || {
            ConsistencyError::UnknownTargetState {
                from: from.to_owned(),
                symbol: symbol.to_owned(),
                state: to.to_owned(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate`], flattened into a `Result`.
pub fn ensure_consistent(
    descriptor: &Descriptor,
    table: &TransitionTable,
) -> Result<(), Vec<ConsistencyError>> {
    match validate(descriptor, table) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn require<F>(holds: bool, violation: F) -> Check
where
    F: FnOnce() -> ConsistencyError,
{
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}
