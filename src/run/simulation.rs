//! Driving a tape to completion.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::MachineConfig;
use crate::error::TagResult;
use crate::rules::{StepOutcome, TagEngine};
use crate::tape::{Tape, TapeSnapshot};

use super::stats::RunStats;
use super::trace::Trace;

/// Final summary of a run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub stats: RunStats,
    pub snapshot: TapeSnapshot,
    /// Live word rendered with the engine's alphabet.
    pub rendered: String,
    pub trace: Option<Trace>,
}

impl RunReport {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.snapshot.running
    }

    #[must_use]
    pub fn has_space_remaining(&self) -> bool {
        self.snapshot.has_space
    }

    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.snapshot.remaining_capacity
    }
}

/// A tape driven by a borrowed engine, with statistics and optional trace.
///
/// ## Example
///
/// ```
/// use rust_tag::run::{HaltReason, Simulation};
/// use rust_tag::systems::collatz;
/// use rust_tag::tape::Tape;
///
/// let engine = collatz::engine();
/// let tape = Tape::<64>::new(&collatz::word(3)).unwrap();
///
/// let mut sim = Simulation::new(&engine, tape).with_trace();
/// assert!(sim.run_until_halt(1_000));
/// assert_eq!(sim.stats().halt, Some(HaltReason::Starvation));
/// assert_eq!(collatz::values(sim.trace().unwrap()), vec![3, 5, 8, 4, 2, 1]);
/// ```
pub struct Simulation<'e, const CAPACITY: usize> {
    engine: &'e TagEngine,
    tape: Tape<CAPACITY>,
    stats: RunStats,
    trace: Option<Trace>,
}

impl<'e, const CAPACITY: usize> Simulation<'e, CAPACITY> {
    /// Start a simulation of `tape` under `engine`.
    pub fn new(engine: &'e TagEngine, tape: Tape<CAPACITY>) -> Self {
        let mut stats = RunStats::new();
        stats.peak_live_len = tape.len();
        Self {
            engine,
            tape,
            stats,
            trace: None,
        }
    }

    /// Record a snapshot after every step that does work.
    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.trace = Some(Trace::new(self.tape.snapshot()));
        self
    }

    /// Apply one step.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.engine.step(&mut self.tape);
        self.stats
            .record(&outcome, self.tape.len(), self.tape.has_space_remaining());

        if outcome != StepOutcome::Idle {
            if let Some(trace) = self.trace.as_mut() {
                trace.push(self.stats.steps, outcome, self.tape.snapshot());
            }
        }
        outcome
    }

    /// Apply `count` steps. Returns how many did work.
    pub fn advance(&mut self, count: usize) -> usize {
        (0..count)
            .filter(|_| self.step() != StepOutcome::Idle)
            .count()
    }

    /// Step until the tape stops or `limit` steps have run.
    ///
    /// Returns whether the tape stopped.
    pub fn run_until_halt(&mut self, limit: usize) -> bool {
        info!(capacity = CAPACITY, live = self.tape.len(), limit, "run started");

        for _ in 0..limit {
            if !self.tape.is_running() {
                break;
            }
            self.step();
        }

        let halted = !self.tape.is_running();
        info!(
            steps = self.stats.steps,
            halted,
            has_space = self.tape.has_space_remaining(),
            halt = ?self.stats.halt,
            "run finished"
        );
        halted
    }

    #[must_use]
    pub fn tape(&self) -> &Tape<CAPACITY> {
        &self.tape
    }

    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    #[must_use]
    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Summarize the run so far.
    #[must_use]
    pub fn report(&self) -> RunReport {
        RunReport {
            stats: self.stats.clone(),
            snapshot: self.tape.snapshot(),
            rendered: self.engine.render(&self.tape),
            trace: self.trace.clone(),
        }
    }

    /// Finish the run and take the report, moving the trace out.
    #[must_use]
    pub fn into_report(self) -> RunReport {
        RunReport {
            snapshot: self.tape.snapshot(),
            rendered: self.engine.render(&self.tape),
            stats: self.stats,
            trace: self.trace,
        }
    }
}

/// Build and drive the machine a config describes for `config.steps` steps.
pub fn run_config<const CAPACITY: usize>(config: &MachineConfig) -> TagResult<RunReport> {
    let engine = TagEngine::new(config.rule_table()?);
    let tape = Tape::<CAPACITY>::new(&config.initial_word()?)?;

    let mut sim = Simulation::new(&engine, tape);
    if config.record_trace {
        sim = sim.with_trace();
    }
    sim.advance(config.steps);

    info!(steps = sim.stats().steps, word = %sim.engine.render(sim.tape()), "config run complete");
    Ok(sim.into_report())
}
