//! Random tag systems.
//!
//! Generates well-formed rule tables and initial words from a seed. Used to
//! explore halting behavior and to feed property tests and benchmarks.
//!
//! `SystemStream` draws many systems from one seed and can be saved and
//! resumed through its `TagRngState`.

use serde::{Deserialize, Serialize};

use crate::core::{Alphabet, Symbol, TagRng, TagRngState};
use crate::error::ConstructionError;
use crate::rules::RuleTable;

/// Parameters for random system generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomSystem {
    /// Number of letters.
    pub alphabet_size: usize,

    /// Longest production to generate.
    pub max_rule_length: usize,

    /// Length of the initial word (at least 1).
    pub word_length: usize,

    /// Chance that a production symbol is the halting symbol.
    pub halt_probability: f64,
}

impl Default for RandomSystem {
    fn default() -> Self {
        Self {
            alphabet_size: 3,
            max_rule_length: 4,
            word_length: 6,
            halt_probability: 0.05,
        }
    }
}

impl RandomSystem {
    /// Defaults with a custom alphabet size.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            alphabet_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_rule_length(mut self, max: usize) -> Self {
        self.max_rule_length = max;
        self
    }

    #[must_use]
    pub fn with_word_length(mut self, len: usize) -> Self {
        self.word_length = len;
        self
    }

    /// Set the halting probability, clamped to `0.0..=1.0`. NaN becomes 0.
    #[must_use]
    pub fn with_halt_probability(mut self, probability: f64) -> Self {
        self.halt_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Check the parameters before sampling.
    ///
    /// Fields are public and deserializable, so the builder's clamping is
    /// not enough on its own.
    pub fn validate(&self) -> Result<Alphabet, ConstructionError> {
        let alphabet = Alphabet::new(self.alphabet_size)?;
        if !(0.0..=1.0).contains(&self.halt_probability) {
            return Err(ConstructionError::HaltProbability {
                probability: self.halt_probability,
            });
        }
        if self.max_rule_length > RuleTable::MAX_RULE_LENGTH {
            return Err(ConstructionError::RowWidth {
                max: self.max_rule_length,
                limit: RuleTable::MAX_RULE_LENGTH,
            });
        }
        Ok(alphabet)
    }

    /// Generate a rule table.
    pub fn rules(&self, rng: &mut TagRng) -> Result<RuleTable, ConstructionError> {
        let alphabet = self.validate()?;
        let rules: Vec<Vec<Symbol>> = alphabet
            .letters()
            .map(|_| {
                let len = rng.gen_range(0..=self.max_rule_length);
                (0..len).map(|_| self.production_symbol(alphabet, rng)).collect()
            })
            .collect();

        RuleTable::with_max_rule_length(self.alphabet_size, self.max_rule_length, &rules)
    }

    /// Generate an initial word of letters only.
    pub fn word(&self, rng: &mut TagRng) -> Result<Vec<Symbol>, ConstructionError> {
        let alphabet = Alphabet::new(self.alphabet_size)?;
        Ok((0..self.word_length.max(1))
            .map(|_| Symbol::new(rng.gen_range(0..alphabet.size()) as u8))
            .collect())
    }

    /// Generate a rule table and initial word from `seed`.
    ///
    /// The word comes from a forked stream, so changing rule parameters
    /// does not disturb it.
    pub fn generate(&self, seed: u64) -> Result<(RuleTable, Vec<Symbol>), ConstructionError> {
        SystemStream::new(self.clone(), seed).next_system()
    }

    fn production_symbol(&self, alphabet: Alphabet, rng: &mut TagRng) -> Symbol {
        if rng.gen_bool(self.halt_probability) {
            alphabet.halting()
        } else {
            Symbol::new(rng.gen_range(0..alphabet.size()) as u8)
        }
    }
}

/// A resumable sequence of random systems drawn from one seed.
///
/// ```
/// use rust_tag::generate::{RandomSystem, SystemStream};
///
/// let mut stream = SystemStream::new(RandomSystem::default(), 9);
/// stream.next_system().unwrap();
///
/// let saved = stream.state();
/// let mut resumed = SystemStream::resume(RandomSystem::default(), &saved);
/// assert_eq!(stream.next_system().unwrap(), resumed.next_system().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct SystemStream {
    params: RandomSystem,
    rng: TagRng,
}

impl SystemStream {
    /// Start a stream at `seed`.
    #[must_use]
    pub fn new(params: RandomSystem, seed: u64) -> Self {
        Self {
            params,
            rng: TagRng::new(seed),
        }
    }

    /// Continue a stream from a saved position.
    #[must_use]
    pub fn resume(params: RandomSystem, state: &TagRngState) -> Self {
        Self {
            params,
            rng: TagRng::from_state(state),
        }
    }

    /// Position to pass to `resume`.
    #[must_use]
    pub fn state(&self) -> TagRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn params(&self) -> &RandomSystem {
        &self.params
    }

    /// Draw the next rule table and initial word.
    ///
    /// The word comes from a forked stream, so changing rule parameters
    /// does not disturb it.
    pub fn next_system(&mut self) -> Result<(RuleTable, Vec<Symbol>), ConstructionError> {
        let mut word_rng = self.rng.fork();
        let rules = self.params.rules(&mut self.rng)?;
        Ok((rules, self.params.word(&mut word_rng)?))
    }
}
