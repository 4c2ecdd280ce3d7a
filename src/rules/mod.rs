//! Production rules and the stepping engine.
//!
//! - `RuleTable`: one padded production row per letter, immutable once built
//! - `TagEngine`: applies one rewrite per `step` against any `Tape`
//!
//! The engine never distinguishes how a tape stopped in the tape itself;
//! `StepOutcome` reports it at the call that caused it.

mod engine;
mod table;

pub use engine::{StepOutcome, TagEngine};
pub use table::{Row, RuleTable};
