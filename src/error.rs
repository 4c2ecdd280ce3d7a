//! Error types.
//!
//! Only construction can fail. A tape that overflows or halts is still a
//! valid tape; those outcomes are reported through its flags.

use thiserror::Error;

use crate::core::Symbol;

/// Caller misuse detected while building a tape, alphabet, or rule table.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConstructionError {
    #[error("initial word must contain at least one symbol")]
    EmptyWord,

    #[error("word of length {len} does not fit a tape of capacity {capacity}")]
    WordTooLong { len: usize, capacity: usize },

    #[error("live length {live} exceeds the supplied buffer of {available} symbols")]
    LiveLengthExceedsBuffer { live: usize, available: usize },

    #[error("alphabet size {size} is out of range 1..={max}")]
    AlphabetSize { size: usize, max: usize },

    #[error("expected {expected} rules, got {actual}")]
    RuleCount { expected: usize, actual: usize },

    #[error("row width {max} exceeds the limit of {limit}")]
    RowWidth { max: usize, limit: usize },

    #[error("rule for {symbol} has length {len}, exceeding the maximum of {max}")]
    RuleTooLong { symbol: Symbol, len: usize, max: usize },

    #[error("symbol {symbol} cannot appear in a production (alphabet size {alphabet_size})")]
    InvalidProductionSymbol { symbol: Symbol, alphabet_size: usize },

    #[error("unknown glyph '{glyph}'")]
    UnknownGlyph { glyph: char },

    #[error("halt probability {probability} is outside 0.0..=1.0")]
    HaltProbability { probability: f64 },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum TagError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("invalid machine config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("trace codec failure: {0}")]
    Codec(#[from] bincode::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TagResult<T> = Result<T, TagError>;
