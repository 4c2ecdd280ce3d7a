//! Running machines: statistics, traces, and the simulation driver.
//!
//! `TagEngine::steps` is enough to advance a tape. `Simulation` adds what a
//! caller usually wants around it: per-run statistics, an optional snapshot
//! after every step, and a serializable final report.

mod simulation;
mod stats;
mod trace;

pub use simulation::{run_config, RunReport, Simulation};
pub use stats::{HaltReason, RunStats};
pub use trace::{Trace, TraceEntry};
