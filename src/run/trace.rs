//! Step-by-step record of a run.
//!
//! A `Trace` stores the initial snapshot and one entry per step that did
//! work. It round-trips through JSON (serde) and a compact bincode form.

use serde::{Deserialize, Serialize};

use crate::core::Alphabet;
use crate::error::TagResult;
use crate::rules::StepOutcome;
use crate::tape::TapeSnapshot;

/// One recorded step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 1-based step number.
    pub step: u64,
    pub outcome: StepOutcome,
    /// Tape state after the step.
    pub snapshot: TapeSnapshot,
}

/// Ordered record of a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub initial: TapeSnapshot,
    pub entries: Vec<TraceEntry>,
}

impl Trace {
    /// Start a trace at `initial`.
    #[must_use]
    pub fn new(initial: TapeSnapshot) -> Self {
        Self {
            initial,
            entries: Vec::new(),
        }
    }

    /// Append a step.
    pub fn push(&mut self, step: u64, outcome: StepOutcome, snapshot: TapeSnapshot) {
        self.entries.push(TraceEntry {
            step,
            outcome,
            snapshot,
        });
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent snapshot (the initial one if no steps were recorded).
    #[must_use]
    pub fn last_snapshot(&self) -> &TapeSnapshot {
        self.entries
            .last()
            .map_or(&self.initial, |entry| &entry.snapshot)
    }

    /// All snapshots in order, starting with the initial one.
    pub fn snapshots(&self) -> impl Iterator<Item = &TapeSnapshot> {
        std::iter::once(&self.initial).chain(self.entries.iter().map(|e| &e.snapshot))
    }

    /// One printable line per snapshot: `step: word`.
    #[must_use]
    pub fn lines(&self, alphabet: Alphabet) -> Vec<String> {
        std::iter::once((0, &self.initial))
            .chain(self.entries.iter().map(|e| (e.step, &e.snapshot)))
            .map(|(step, snapshot)| format!("{:>4}: {}", step, snapshot.render(alphabet)))
            .collect()
    }

    /// Encode as bincode.
    pub fn to_bytes(&self) -> TagResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> TagResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
