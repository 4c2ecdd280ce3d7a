//! The 2-tag stepping engine.
//!
//! Each step reads two symbols from the tape and appends the production of
//! the first. The engine holds only the immutable rule table, so one engine
//! can drive any number of tapes.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Alphabet, Symbol};
use crate::tape::Tape;

use super::table::RuleTable;

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// A letter was read and its production appended.
    Rewrote {
        lead: Symbol,
        /// Symbols actually written.
        appended: usize,
        /// The production did not fit.
        truncated: bool,
    },

    /// A no-op filler was read; two symbols consumed, nothing appended.
    Skipped { lead: Symbol },

    /// The halting symbol was read.
    HaltedBySymbol,

    /// Fewer than two live symbols remained.
    Starved,

    /// The tape had already stopped; nothing changed.
    Idle,
}

impl StepOutcome {
    /// Did this step consume symbols?
    #[must_use]
    pub fn consumed(&self) -> bool {
        matches!(
            self,
            StepOutcome::Rewrote { .. } | StepOutcome::Skipped { .. } | StepOutcome::HaltedBySymbol
        )
    }

    /// Did this step stop the tape?
    #[must_use]
    pub fn halted(&self) -> bool {
        matches!(self, StepOutcome::HaltedBySymbol | StepOutcome::Starved)
    }
}

/// Rule-table driven 2-tag engine.
///
/// ## Example
///
/// ```
/// use rust_tag::core::word;
/// use rust_tag::rules::{RuleTable, StepOutcome, TagEngine};
/// use rust_tag::tape::Tape;
///
/// let table = RuleTable::new(3, &[word(&[1, 2]), word(&[0]), word(&[0, 0, 0])]).unwrap();
/// let engine = TagEngine::new(table);
///
/// let mut tape = Tape::<64>::new(&word(&[0, 0, 0])).unwrap();
/// engine.step(&mut tape);
/// assert_eq!(engine.render(&tape), "abc");
///
/// engine.steps(&mut tape, 100);
/// assert!(!tape.is_running());
/// assert!(tape.has_space_remaining());
/// assert_eq!(engine.step(&mut tape), StepOutcome::Idle);
/// ```
#[derive(Clone, Debug)]
pub struct TagEngine {
    rules: RuleTable,
}

impl TagEngine {
    /// Create an engine that owns `rules`.
    #[must_use]
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    /// The rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The alphabet of the rule table.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.rules.alphabet()
    }

    /// Apply one rewrite step.
    pub fn step<const CAPACITY: usize>(&self, tape: &mut Tape<CAPACITY>) -> StepOutcome {
        if !tape.is_running() {
            return StepOutcome::Idle;
        }

        // Both symbols are consumed; only the first selects a rule.
        let Some((lead, _)) = tape.remove_two() else {
            return StepOutcome::Starved;
        };

        let alphabet = self.rules.alphabet();
        if lead == alphabet.halting() {
            tape.halt();
            debug!(consumed = tape.consumed(), "halting symbol read");
            return StepOutcome::HaltedBySymbol;
        }

        // Only letters own a row; a live filler produces the empty word.
        let Some(row) = self.rules.row(lead) else {
            trace!(lead = lead.raw(), "no-op lead skipped");
            return StepOutcome::Skipped { lead };
        };

        let noop = alphabet.noop();
        let appended = tape.append(row, noop);
        let wanted = row.iter().take_while(|&&s| s != noop).count();
        trace!(lead = %alphabet.glyph(lead), appended, live = tape.len(), "rewrote");
        StepOutcome::Rewrote {
            lead,
            appended,
            truncated: appended < wanted,
        }
    }

    /// Apply `count` steps.
    ///
    /// Steps past a halt are harmless no-ops. Returns how many of the calls
    /// did work (were not `Idle`).
    pub fn steps<const CAPACITY: usize>(&self, tape: &mut Tape<CAPACITY>, count: usize) -> usize {
        let mut active = 0;
        for _ in 0..count {
            if self.step(tape) != StepOutcome::Idle {
                active += 1;
            }
        }
        active
    }

    /// Render a tape's live word with this engine's alphabet.
    #[must_use]
    pub fn render<const CAPACITY: usize>(&self, tape: &Tape<CAPACITY>) -> String {
        self.alphabet().render(tape.live())
    }
}
