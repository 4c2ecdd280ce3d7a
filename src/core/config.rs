//! Machine configuration.
//!
//! A `MachineConfig` describes one run: the alphabet, a production word for
//! every letter, the initial word, and how many steps to drive. Words are
//! written in glyphs (`a`, `b`, ... for letters, `H` for the halting symbol),
//! so a config reads naturally as JSON:
//!
//! ```json
//! { "alphabet_size": 3, "rules": ["bc", "a", "aaa"], "initial_word": "aaa", "steps": 30 }
//! ```
//!
//! Nothing is validated until `rule_table()` or `initial_word()` is called.

use serde::{Deserialize, Serialize};

use super::symbol::{Alphabet, Symbol};
use crate::error::{ConstructionError, TagResult};
use crate::rules::RuleTable;

/// Serializable description of a tag system run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Number of letters `N`.
    pub alphabet_size: usize,

    /// Padded row width. `None` sizes rows to the longest production.
    #[serde(default)]
    pub max_rule_length: Option<usize>,

    /// Production for each letter, in glyphs, indexed by letter.
    pub rules: Vec<String>,

    /// Initial tape contents, in glyphs.
    pub initial_word: String,

    /// Number of steps to drive.
    #[serde(default)]
    pub steps: usize,

    /// Record a snapshot after every step.
    #[serde(default)]
    pub record_trace: bool,
}

impl MachineConfig {
    /// Create an empty configuration for an alphabet of `alphabet_size` letters.
    pub fn new(alphabet_size: usize) -> Self {
        Self {
            alphabet_size,
            max_rule_length: None,
            rules: Vec::new(),
            initial_word: String::new(),
            steps: 0,
            record_trace: false,
        }
    }

    /// Add the production for the next letter.
    #[must_use]
    pub fn with_rule(mut self, production: impl Into<String>) -> Self {
        self.rules.push(production.into());
        self
    }

    /// Set the initial word.
    #[must_use]
    pub fn with_initial_word(mut self, word: impl Into<String>) -> Self {
        self.initial_word = word.into();
        self
    }

    /// Set the step count.
    #[must_use]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Fix the padded row width.
    #[must_use]
    pub fn with_max_rule_length(mut self, max: usize) -> Self {
        self.max_rule_length = Some(max);
        self
    }

    /// Record a trace while running.
    #[must_use]
    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> TagResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration as pretty JSON.
    pub fn to_json(&self) -> TagResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The validated alphabet.
    pub fn alphabet(&self) -> Result<Alphabet, ConstructionError> {
        Alphabet::new(self.alphabet_size)
    }

    /// Build the validated rule table.
    pub fn rule_table(&self) -> Result<RuleTable, ConstructionError> {
        let alphabet = self.alphabet()?;
        let rules = self
            .rules
            .iter()
            .map(|text| alphabet.parse(text))
            .collect::<Result<Vec<_>, _>>()?;

        match self.max_rule_length {
            Some(max) => RuleTable::with_max_rule_length(self.alphabet_size, max, &rules),
            None => RuleTable::new(self.alphabet_size, &rules),
        }
    }

    /// Parse the initial word.
    ///
    /// Emptiness is left to the tape constructor.
    pub fn initial_word(&self) -> Result<Vec<Symbol>, ConstructionError> {
        self.alphabet()?.parse(&self.initial_word)
    }
}
