//! Ready-made tag systems.

pub mod collatz;

use crate::core::{word, Symbol};
use crate::rules::RuleTable;

/// A system that reads its halting symbol after a few steps.
///
/// Rules `a -> ccbaH`, `b -> cca`, `c -> aaa`, started on `baa`.
#[must_use]
pub fn halting_sample() -> (RuleTable, Vec<Symbol>) {
    let rules = RuleTable::new(
        3,
        &[word(&[2, 2, 1, 0, 3]), word(&[2, 2, 0]), word(&[0, 0, 0])],
    )
    .expect("halting sample rules are well-formed");
    (rules, word(&[1, 0, 0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{StepOutcome, TagEngine};
    use crate::tape::Tape;

    #[test]
    fn test_halting_sample() {
        let (rules, initial) = halting_sample();
        let engine = TagEngine::new(rules);
        let mut tape = Tape::<32>::new(&initial).unwrap();

        assert_eq!(engine.steps(&mut tape, 5), 5);
        assert_eq!(engine.render(&tape), "Haaaaaacca");
        assert_eq!(engine.step(&mut tape), StepOutcome::HaltedBySymbol);
        assert_eq!(engine.render(&tape), "aaaaacca");
    }
}
