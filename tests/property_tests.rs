//! Property tests over randomly generated tag systems.
//!
//! Every property is checked step by step against systems drawn from
//! `RandomSystem`, so the halting symbol, empty productions, overflow and
//! starvation all show up across cases.

use proptest::prelude::*;

use rust_tag::core::Symbol;
use rust_tag::generate::RandomSystem;
use rust_tag::rules::{StepOutcome, TagEngine};
use rust_tag::tape::Tape;

const CAPACITY: usize = 48;

fn machine(
    seed: u64,
    alphabet_size: usize,
    max_rule_length: usize,
    word_length: usize,
) -> (TagEngine, Tape<CAPACITY>) {
    let (rules, word) = RandomSystem::new(alphabet_size)
        .with_max_rule_length(max_rule_length)
        .with_word_length(word_length)
        .with_halt_probability(0.1)
        .generate(seed)
        .unwrap();
    (TagEngine::new(rules), Tape::new(&word).unwrap())
}

proptest! {
    /// Every consuming step advances the read cursor by exactly two.
    #[test]
    fn prop_two_symbols_consumed(
        seed in any::<u64>(),
        alphabet_size in 1usize..6,
        max_rule_length in 0usize..6,
        word_length in 1usize..12,
        steps in 1usize..60,
    ) {
        let (engine, mut tape) = machine(seed, alphabet_size, max_rule_length, word_length);

        for _ in 0..steps {
            let consumed_before = tape.consumed();
            let len_before = tape.len();
            let outcome = engine.step(&mut tape);

            if outcome.consumed() {
                prop_assert_eq!(tape.consumed(), consumed_before + 2);
                let appended = match outcome {
                    StepOutcome::Rewrote { appended, .. } => appended,
                    _ => 0,
                };
                prop_assert_eq!(tape.len(), len_before - 2 + appended);
            } else {
                prop_assert_eq!(tape.consumed(), consumed_before);
                prop_assert_eq!(tape.len(), len_before);
            }
        }
    }

    /// Once out of space, a tape never regains it.
    #[test]
    fn prop_overflow_is_sticky(
        seed in any::<u64>(),
        alphabet_size in 1usize..6,
        max_rule_length in 1usize..8,
        word_length in 1usize..12,
        steps in 1usize..80,
    ) {
        let (engine, mut tape) = machine(seed, alphabet_size, max_rule_length, word_length);
        let mut overflowed = false;

        for _ in 0..steps {
            engine.step(&mut tape);
            if overflowed {
                prop_assert!(!tape.has_space_remaining());
            }
            overflowed |= !tape.has_space_remaining();
        }
    }

    /// Once stopped, a tape never restarts and its live word never changes.
    #[test]
    fn prop_halt_is_sticky(
        seed in any::<u64>(),
        alphabet_size in 1usize..6,
        max_rule_length in 0usize..6,
        word_length in 1usize..12,
        steps in 1usize..80,
    ) {
        let (engine, mut tape) = machine(seed, alphabet_size, max_rule_length, word_length);
        let mut halted_word: Option<Vec<Symbol>> = None;

        for _ in 0..steps {
            let outcome = engine.step(&mut tape);
            match &halted_word {
                Some(word) => {
                    prop_assert_eq!(outcome, StepOutcome::Idle);
                    prop_assert!(!tape.is_running());
                    prop_assert_eq!(tape.live(), &word[..]);
                }
                None if !tape.is_running() => {
                    prop_assert!(outcome.halted());
                    halted_word = Some(tape.live().to_vec());
                }
                None => {}
            }
        }
    }

    /// Appends keep exactly the prefix that fits.
    #[test]
    fn prop_append_truncation(
        seed in any::<u64>(),
        alphabet_size in 1usize..6,
        max_rule_length in 1usize..8,
        word_length in 1usize..12,
        steps in 1usize..80,
    ) {
        let (engine, mut tape) = machine(seed, alphabet_size, max_rule_length, word_length);
        let noop = engine.alphabet().noop();

        for _ in 0..steps {
            let room = tape.remaining_capacity();
            let had_space = tape.has_space_remaining();
            let outcome = engine.step(&mut tape);

            if let StepOutcome::Rewrote { lead, appended, truncated } = outcome {
                let production = engine.rules().production(lead).unwrap();
                prop_assert!(production.iter().all(|&s| s != noop));
                prop_assert_eq!(appended, production.len().min(room));
                prop_assert_eq!(truncated, production.len() > room);
                if truncated {
                    prop_assert!(!tape.has_space_remaining());
                    let live = tape.live();
                    prop_assert_eq!(&live[live.len() - appended..], &production[..appended]);
                } else {
                    prop_assert_eq!(tape.has_space_remaining(), had_space);
                }
            }
        }
    }

    /// A stopped tape yields identical snapshots however often it is stepped.
    #[test]
    fn prop_halted_snapshots_identical(
        seed in any::<u64>(),
        alphabet_size in 1usize..6,
        max_rule_length in 0usize..6,
        word_length in 1usize..12,
        extra in 1usize..20,
    ) {
        let (engine, mut tape) = machine(seed, alphabet_size, max_rule_length, word_length);

        // Each step consumes two cells, so CAPACITY steps always reach a halt.
        engine.steps(&mut tape, CAPACITY);
        prop_assert!(!tape.is_running());

        let snapshot = tape.snapshot();
        for _ in 0..extra {
            engine.step(&mut tape);
            prop_assert_eq!(&tape.snapshot(), &snapshot);
        }
    }
}
