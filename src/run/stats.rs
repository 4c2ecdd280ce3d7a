//! Run statistics for diagnostics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Symbol;
use crate::rules::StepOutcome;

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// The halting symbol was read.
    Symbol,
    /// Fewer than two live symbols remained.
    Starvation,
}

/// Statistics collected while driving a tape.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Steps that did work (idle steps after a halt are not counted).
    pub steps: u64,

    pub symbols_consumed: u64,

    pub symbols_appended: u64,

    /// How often each letter's rule fired.
    pub rule_fires: FxHashMap<Symbol, u64>,

    /// Longest live word observed.
    pub peak_live_len: usize,

    /// Step at which the tape first ran out of space.
    pub overflow_step: Option<u64>,

    pub halt: Option<HaltReason>,
}

impl RunStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one step into the totals.
    ///
    /// `live_len` and `has_space` describe the tape after the step.
    pub fn record(&mut self, outcome: &StepOutcome, live_len: usize, has_space: bool) {
        if *outcome == StepOutcome::Idle {
            return;
        }
        self.steps += 1;

        if outcome.consumed() {
            self.symbols_consumed += 2;
        }

        match *outcome {
            StepOutcome::Rewrote { lead, appended, .. } => {
                self.symbols_appended += appended as u64;
                *self.rule_fires.entry(lead).or_insert(0) += 1;
            }
            StepOutcome::HaltedBySymbol => self.halt = Some(HaltReason::Symbol),
            StepOutcome::Starved => self.halt = Some(HaltReason::Starvation),
            StepOutcome::Skipped { .. } | StepOutcome::Idle => {}
        }

        if !has_space && self.overflow_step.is_none() {
            self.overflow_step = Some(self.steps);
        }
        self.peak_live_len = self.peak_live_len.max(live_len);
    }

    /// Number of times `lead`'s rule fired.
    #[must_use]
    pub fn fires(&self, lead: Symbol) -> u64 {
        self.rule_fires.get(&lead).copied().unwrap_or(0)
    }

    /// Appended symbols per consumed symbol.
    #[must_use]
    pub fn growth_ratio(&self) -> f64 {
        if self.symbols_consumed == 0 {
            0.0
        } else {
            self.symbols_appended as f64 / self.symbols_consumed as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrote(lead: u8, appended: usize) -> StepOutcome {
        StepOutcome::Rewrote {
            lead: Symbol::new(lead),
            appended,
            truncated: false,
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = RunStats::new();
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.halt, None);
        assert_eq!(stats.growth_ratio(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut stats = RunStats::new();
        stats.record(&rewrote(0, 2), 3, true);
        stats.record(&rewrote(0, 2), 3, true);
        stats.record(&rewrote(2, 3), 4, true);
        stats.record(&StepOutcome::Starved, 4, true);
        stats.record(&StepOutcome::Idle, 4, true);

        assert_eq!(stats.steps, 4);
        assert_eq!(stats.symbols_consumed, 6);
        assert_eq!(stats.symbols_appended, 7);
        assert_eq!(stats.fires(Symbol::new(0)), 2);
        assert_eq!(stats.fires(Symbol::new(1)), 0);
        assert_eq!(stats.peak_live_len, 4);
        assert_eq!(stats.halt, Some(HaltReason::Starvation));
        assert_eq!(stats.overflow_step, None);
    }

    #[test]
    fn test_overflow_step_is_first() {
        let mut stats = RunStats::new();
        stats.record(&rewrote(0, 2), 3, true);
        stats.record(&rewrote(0, 1), 2, false);
        stats.record(&rewrote(0, 0), 1, false);

        assert_eq!(stats.overflow_step, Some(2));
    }

    #[test]
    fn test_halt_by_symbol() {
        let mut stats = RunStats::new();
        stats.record(&StepOutcome::HaltedBySymbol, 5, true);
        assert_eq!(stats.halt, Some(HaltReason::Symbol));
        assert_eq!(stats.symbols_consumed, 2);
    }

    #[test]
    fn test_reset() {
        let mut stats = RunStats::new();
        stats.record(&rewrote(1, 1), 1, true);
        stats.reset();
        assert_eq!(stats.steps, 0);
        assert!(stats.rule_fires.is_empty());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = RunStats::new();
        stats.record(&rewrote(1, 1), 1, true);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"steps\":1"));

        let bytes = bincode::serialize(&stats).unwrap();
        let deserialized: RunStats = bincode::deserialize(&bytes).unwrap();

        assert_eq!(deserialized.steps, 1);
        assert_eq!(deserialized.fires(Symbol::new(1)), 1);
    }
}
