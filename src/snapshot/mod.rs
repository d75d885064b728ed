//! Versioned snapshots of automata.
//!
//! A snapshot wraps an [`Automaton`] with a format version, an identifier and
//! a creation time so it can be stored as JSON or in a compact binary form
//! and restored later.

use crate::core::Automaton;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton.
///
/// # Example
///
/// ```rust
/// use dfa_sim::parser::parse_automaton;
/// use dfa_sim::snapshot::Snapshot;
///
/// let automaton = parse_automaton("M=({q0},{a},Prog,q0,{q0})\nProg\n(q0,a)=q0").unwrap();
/// let json = Snapshot::capture(&automaton).to_json().unwrap();
///
/// let restored = Snapshot::from_json(&json).unwrap().restore();
/// assert_eq!(restored, automaton);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was created
    pub created_at: DateTime<Utc>,

    /// The captured automaton, including its engine configuration
    pub automaton: Automaton,
}

impl Snapshot {
    /// Capture a snapshot of `automaton`.
    pub fn capture(automaton: &Automaton) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            automaton: automaton.clone(),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.checked()
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from the compact binary format, rejecting unknown format
    /// versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.checked()
    }

    /// Take the captured automaton back out.
    pub fn restore(self) -> Automaton {
        debug!(id = %self.id, name = self.automaton.name(), "snapshot restored");
        self.automaton
    }

    fn checked(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Descriptor, EngineConfig, MatchStrategy, TransitionTable};

    fn sample() -> Automaton {
        let descriptor = Descriptor::new("M", ["q0", "q1"], ["a", "ab", "b"], "q0", ["q1"]);
        let table: TransitionTable = [("q0", "a", "q1"), ("q1", "b", "q1"), ("q0", "ab", "q0")]
            .into_iter()
            .collect();
        Automaton::with_config(descriptor, table, EngineConfig::declaration_order())
    }

    #[test]
    fn json_roundtrip_restores_automaton() {
        let snapshot = Snapshot::capture(&sample());
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();

        assert_eq!(restored, snapshot);
        let automaton = restored.restore();
        assert_eq!(automaton.render(), sample().render());
        assert_eq!(
            automaton.config().match_strategy,
            MatchStrategy::DeclarationOrder
        );
    }

    #[test]
    fn binary_roundtrip_restores_automaton() {
        let snapshot = Snapshot::capture(&sample());
        let bytes = snapshot.to_bytes().unwrap();
        let restored = Snapshot::from_bytes(&bytes).unwrap();

        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.restore(), sample());
    }

    #[test]
    fn restored_automaton_behaves_the_same() {
        let bytes = Snapshot::capture(&sample()).to_bytes().unwrap();
        let restored = Snapshot::from_bytes(&bytes).unwrap().restore();

        for word in ["", "a", "ab", "abb", "b", "x"] {
            assert_eq!(restored.accepts(word), sample().accepts(word));
        }
    }

    #[test]
    fn snapshots_get_distinct_ids() {
        let automaton = sample();
        assert_ne!(
            Snapshot::capture(&automaton).id,
            Snapshot::capture(&automaton).id
        );
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut snapshot = Snapshot::capture(&sample());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = snapshot.to_json().unwrap();

        let err = Snapshot::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::UnsupportedVersion { found, supported }
                if found == SNAPSHOT_VERSION + 1 && supported == SNAPSHOT_VERSION
        ));
    }

    #[test]
    fn garbage_json_keeps_the_parser_error() {
        match Snapshot::from_json("not json") {
            Err(SnapshotError::Json(source)) => assert!(source.is_syntax()),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_json_reports_end_of_input() {
        let json = Snapshot::capture(&sample()).to_json().unwrap();
        let cut = &json[..json.len() / 2];

        let err = Snapshot::from_json(cut).unwrap_err();
        assert!(err.to_string().starts_with("JSON snapshot error"));
        match err {
            SnapshotError::Json(source) => assert!(source.is_eof()),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn json_of_another_shape_is_a_data_error() {
        match Snapshot::from_json(r#"{"version": 1}"#) {
            Err(SnapshotError::Json(source)) => assert!(source.is_data()),
            other => panic!("expected a JSON error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_bytes_report_a_binary_error() {
        let bytes = Snapshot::capture(&sample()).to_bytes().unwrap();

        for cut in [&bytes[..2], &bytes[..bytes.len() - 1]] {
            let err = Snapshot::from_bytes(cut).unwrap_err();
            assert!(err.to_string().starts_with("binary snapshot error"));
            assert!(matches!(err, SnapshotError::Binary(_)));
        }
    }
}
