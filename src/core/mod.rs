//! Core types: symbols, alphabets, configuration, RNG.
//!
//! These are the building blocks shared by the tape, the rule table, and the
//! engine.

pub mod config;
pub mod rng;
pub mod symbol;

pub use config::MachineConfig;
pub use rng::{TagRng, TagRngState};
pub use symbol::{word, Alphabet, Symbol, SymbolKind, HALT_GLYPH, NOOP_GLYPH};
