//! De Mol's 2-tag system for the Collatz map.
//!
//! Rules `a -> bc`, `b -> a`, `c -> aaa`. Started on `a^n`, the machine
//! passes through `a^m` exactly for the values `m` of the compressed Collatz
//! sequence (`n/2` for even `n`, `(3n + 1)/2` for odd `n`) and starves on
//! `a` once the sequence reaches 1.

use crate::core::{word as symbols, Symbol};
use crate::rules::{RuleTable, StepOutcome, TagEngine};
use crate::run::Trace;

pub const A: Symbol = Symbol::new(0);
pub const B: Symbol = Symbol::new(1);
pub const C: Symbol = Symbol::new(2);

/// The three Collatz rules.
#[must_use]
pub fn rules() -> RuleTable {
    RuleTable::new(3, &[symbols(&[1, 2]), symbols(&[0]), symbols(&[0, 0, 0])])
        .expect("collatz rules are well-formed")
}

/// An engine for the Collatz rules.
#[must_use]
pub fn engine() -> TagEngine {
    TagEngine::new(rules())
}

/// The initial word `a^n`.
#[must_use]
pub fn word(n: usize) -> Vec<Symbol> {
    vec![A; n]
}

/// Collatz values visited in a trace: the lengths of the all-`a` words.
///
/// Only meaningful for runs that never overflowed.
#[must_use]
pub fn values(trace: &Trace) -> Vec<usize> {
    let rewrites = trace
        .entries
        .iter()
        .filter(|e| matches!(e.outcome, StepOutcome::Rewrote { .. }))
        .map(|e| &e.snapshot);

    std::iter::once(&trace.initial)
        .chain(rewrites)
        .filter(|s| !s.is_empty() && s.symbols.iter().all(|&sym| sym == A))
        .map(|s| s.len())
        .collect()
}

/// The compressed Collatz sequence from `n` down to 1.
#[must_use]
pub fn reference(mut n: usize) -> Vec<usize> {
    assert!(n > 0, "Collatz sequence starts at a positive value");

    let mut sequence = vec![n];
    while n != 1 {
        n = if n % 2 == 0 { n / 2 } else { (3 * n + 1) / 2 };
        sequence.push(n);
    }
    sequence
}
