//! # rust-tag
//!
//! A bounded-tape simulator for 2-tag systems.
//!
//! A 2-tag system repeatedly deletes the first two symbols of its word and
//! appends the production of the first. It stops when it reads the halting
//! symbol or when fewer than two symbols remain.
//!
//! ## Design Principles
//!
//! 1. **Bounded**: The tape is a fixed array chosen at compile time
//!    (`Tape<CAPACITY>`). It never grows or wraps.
//!
//! 2. **Flags, not errors**: Halting and running out of space are expected
//!    outcomes. They are sticky flags on the tape, read between steps.
//!
//! 3. **Shared rules**: A `TagEngine` owns an immutable `RuleTable` and takes
//!    tapes by `&mut`, so one engine can drive many tapes.
//!
//! ## Modules
//!
//! - `core`: Symbols, alphabets, machine configuration, RNG
//! - `tape`: The bounded tape and its snapshots
//! - `rules`: Rule tables and the stepping engine
//! - `run`: Simulation driver, statistics, traces
//! - `systems`: Known tag systems (Collatz)
//! - `generate`: Random tag systems

pub mod core;
pub mod error;
pub mod generate;
pub mod rules;
pub mod run;
pub mod systems;
pub mod tape;

// Re-export commonly used types
pub use crate::core::{word, Alphabet, MachineConfig, Symbol, SymbolKind, TagRng, TagRngState};

pub use crate::error::{ConstructionError, TagError, TagResult};

pub use crate::tape::{Tape, TapeSnapshot};

pub use crate::rules::{RuleTable, StepOutcome, TagEngine};

pub use crate::run::{run_config, HaltReason, RunReport, RunStats, Simulation, Trace, TraceEntry};

pub use crate::generate::{RandomSystem, SystemStream};
