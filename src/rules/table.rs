//! Production rule table.
//!
//! Every letter of the alphabet owns one row. Rows share a fixed width
//! (`max_rule_length`); shorter productions are right-padded with the
//! alphabet's no-op filler, which doubles as the append terminator.

use smallvec::SmallVec;

use crate::core::{Alphabet, Symbol, SymbolKind};
use crate::error::ConstructionError;

/// A padded production row.
/// SmallVec keeps rows of up to 8 symbols inline.
pub type Row = SmallVec<[Symbol; 8]>;

/// Immutable table mapping each letter to its production word.
///
/// ## Example
///
/// ```
/// use rust_tag::core::{word, Symbol};
/// use rust_tag::rules::RuleTable;
///
/// let table = RuleTable::new(3, &[word(&[1, 2]), word(&[0]), word(&[0, 0, 0])]).unwrap();
///
/// // Rows are padded to the longest rule with the no-op filler (4).
/// assert_eq!(table.row(Symbol::new(1)).unwrap(), &word(&[0, 4, 4])[..]);
/// assert_eq!(table.production(Symbol::new(1)).unwrap(), &word(&[0])[..]);
///
/// // The halting symbol has no rule.
/// assert!(table.row(Symbol::new(3)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    alphabet: Alphabet,
    max_rule_length: usize,
    rows: Vec<Row>,
}

impl RuleTable {
    /// Widest row a table may allocate.
    pub const MAX_RULE_LENGTH: usize = u16::MAX as usize;

    /// Build a table whose row width is the longest production.
    pub fn new(alphabet_size: usize, rules: &[Vec<Symbol>]) -> Result<Self, ConstructionError> {
        let max = rules.iter().map(Vec::len).max().unwrap_or(0);
        Self::with_max_rule_length(alphabet_size, max, rules)
    }

    /// Build a table with an explicit row width.
    ///
    /// Requires `max <= MAX_RULE_LENGTH`, exactly one rule per letter, no
    /// rule longer than `max`, and no no-op filler inside a rule. The halting
    /// symbol may appear.
    pub fn with_max_rule_length(
        alphabet_size: usize,
        max: usize,
        rules: &[Vec<Symbol>],
    ) -> Result<Self, ConstructionError> {
        let alphabet = Alphabet::new(alphabet_size)?;

        if max > Self::MAX_RULE_LENGTH {
            return Err(ConstructionError::RowWidth {
                max,
                limit: Self::MAX_RULE_LENGTH,
            });
        }

        if rules.len() != alphabet.size() {
            return Err(ConstructionError::RuleCount {
                expected: alphabet.size(),
                actual: rules.len(),
            });
        }

        let mut rows = Vec::with_capacity(rules.len());
        for (lead, production) in alphabet.letters().zip(rules) {
            if production.len() > max {
                return Err(ConstructionError::RuleTooLong {
                    symbol: lead,
                    len: production.len(),
                    max,
                });
            }
            if let Some(&bad) = production
                .iter()
                .find(|&&s| alphabet.classify(s) == SymbolKind::NoOp)
            {
                return Err(ConstructionError::InvalidProductionSymbol {
                    symbol: bad,
                    alphabet_size: alphabet.size(),
                });
            }

            let mut row = Row::from_slice(production);
            row.resize(max, alphabet.noop());
            rows.push(row);
        }

        Ok(Self {
            alphabet,
            max_rule_length: max,
            rows,
        })
    }

    /// The table's alphabet.
    #[must_use]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Row width.
    #[must_use]
    pub fn max_rule_length(&self) -> usize {
        self.max_rule_length
    }

    /// Padded row for a letter. `None` for the halting symbol and fillers.
    #[must_use]
    pub fn row(&self, lead: Symbol) -> Option<&[Symbol]> {
        self.rows.get(lead.index()).map(|r| r.as_slice())
    }

    /// Production for a letter, without padding.
    #[must_use]
    pub fn production(&self, lead: Symbol) -> Option<&[Symbol]> {
        let noop = self.alphabet.noop();
        self.row(lead).map(|row| {
            let len = row.iter().position(|&s| s == noop).unwrap_or(row.len());
            &row[..len]
        })
    }

    /// Number of rules (always the alphabet size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: alphabets have at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over `(letter, production)` pairs in letter order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[Symbol])> {
        self.alphabet
            .letters()
            .filter_map(move |lead| self.production(lead).map(|p| (lead, p)))
    }
}

impl std::fmt::Display for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (lead, production) in self.iter() {
            writeln!(
                f,
                "{} -> {}",
                self.alphabet.glyph(lead),
                self.alphabet.render(production)
            )?;
        }
        Ok(())
    }
}
