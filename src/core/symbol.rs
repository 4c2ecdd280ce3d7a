//! Symbols and the alphabet that gives them meaning.
//!
//! ## Symbol
//!
//! A tape cell value. The tape itself never interprets symbols; only the
//! engine's `Alphabet` decides whether a value is a letter, the halting
//! symbol, or a no-op filler.
//!
//! ## Alphabet
//!
//! For an alphabet of size `N`:
//! - `0..N` are letters, each with a production rule
//! - `N` is the halting symbol
//! - `N + 1` and above are no-op fillers (used to pad rule rows)

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// A tape symbol.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the symbol value as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter form: `a` for 0, `b` for 1, ... and `?` past `z`.
    #[must_use]
    pub fn letter(self) -> char {
        if self.0 < 26 {
            (b'a' + self.0) as char
        } else {
            '?'
        }
    }
}

/// Letter form only. Whether a value is the halting symbol depends on the
/// alphabet, so `Alphabet::glyph` is the faithful rendering.
impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Build a word from raw values.
///
/// ```
/// use rust_tag::core::{word, Symbol};
///
/// assert_eq!(word(&[0, 2]), vec![Symbol::new(0), Symbol::new(2)]);
/// ```
#[must_use]
pub fn word(values: &[u8]) -> Vec<Symbol> {
    values.iter().copied().map(Symbol).collect()
}

/// How an alphabet classifies a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKind {
    /// An ordinary letter with a production rule.
    Letter,
    /// The halting symbol.
    Halt,
    /// Filler beyond the halting symbol.
    NoOp,
}

/// Glyph used for the halting symbol in rendered and parsed words.
pub const HALT_GLYPH: char = 'H';

/// Glyph used for no-op fillers when rendering.
pub const NOOP_GLYPH: char = '.';

/// An alphabet of `size` letters plus the halting symbol and the no-op filler.
///
/// ```
/// use rust_tag::core::{Alphabet, Symbol, SymbolKind};
///
/// let alphabet = Alphabet::new(3).unwrap();
/// assert_eq!(alphabet.halting(), Symbol::new(3));
/// assert_eq!(alphabet.noop(), Symbol::new(4));
/// assert_eq!(alphabet.classify(Symbol::new(1)), SymbolKind::Letter);
/// assert_eq!(alphabet.render(&alphabet.parse("abH").unwrap()), "abH");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Alphabet {
    size: u8,
}

impl TryFrom<usize> for Alphabet {
    type Error = ConstructionError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Alphabet> for usize {
    fn from(alphabet: Alphabet) -> usize {
        alphabet.size()
    }
}

impl Alphabet {
    /// Largest alphabet whose no-op filler still fits in a `Symbol`.
    pub const MAX_SIZE: usize = u8::MAX as usize - 1;

    /// Create an alphabet with `size` letters.
    pub fn new(size: usize) -> Result<Self, ConstructionError> {
        if size == 0 || size > Self::MAX_SIZE {
            return Err(ConstructionError::AlphabetSize {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size: size as u8 })
    }

    /// Number of letters.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size as usize
    }

    /// The halting symbol `N`.
    #[must_use]
    pub const fn halting(self) -> Symbol {
        Symbol(self.size)
    }

    /// The no-op filler `N + 1`.
    #[must_use]
    pub const fn noop(self) -> Symbol {
        Symbol(self.size + 1)
    }

    /// Classify a symbol.
    #[must_use]
    pub fn classify(self, symbol: Symbol) -> SymbolKind {
        match symbol.0.cmp(&self.size) {
            std::cmp::Ordering::Less => SymbolKind::Letter,
            std::cmp::Ordering::Equal => SymbolKind::Halt,
            std::cmp::Ordering::Greater => SymbolKind::NoOp,
        }
    }

    /// Iterate over the letters `0..N`.
    pub fn letters(self) -> impl Iterator<Item = Symbol> {
        (0..self.size).map(Symbol)
    }

    /// Glyph for a single symbol.
    #[must_use]
    pub fn glyph(self, symbol: Symbol) -> char {
        match self.classify(symbol) {
            SymbolKind::Letter => symbol.letter(),
            SymbolKind::Halt => HALT_GLYPH,
            SymbolKind::NoOp => NOOP_GLYPH,
        }
    }

    /// Render a word as glyphs.
    #[must_use]
    pub fn render(self, word: &[Symbol]) -> String {
        word.iter().map(|&s| self.glyph(s)).collect()
    }

    /// Parse a word written in glyphs.
    ///
    /// Whitespace is ignored. `H` is the halting symbol; letters must name
    /// a symbol inside the alphabet.
    pub fn parse(self, text: &str) -> Result<Vec<Symbol>, ConstructionError> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|glyph| self.parse_glyph(glyph))
            .collect()
    }

    fn parse_glyph(self, glyph: char) -> Result<Symbol, ConstructionError> {
        if glyph == HALT_GLYPH {
            return Ok(self.halting());
        }
        if glyph.is_ascii_lowercase() {
            let value = glyph as u8 - b'a';
            if value < self.size {
                return Ok(Symbol(value));
            }
        }
        Err(ConstructionError::UnknownGlyph { glyph })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_letters() {
        assert_eq!(Symbol::new(0).letter(), 'a');
        assert_eq!(Symbol::new(25).letter(), 'z');
        assert_eq!(Symbol::new(26).letter(), '?');
        assert_eq!(format!("{}", Symbol::new(2)), "c");
    }

    #[test]
    fn test_alphabet_bounds() {
        assert!(Alphabet::new(0).is_err());
        assert!(Alphabet::new(Alphabet::MAX_SIZE).is_ok());
        assert_eq!(
            Alphabet::new(Alphabet::MAX_SIZE + 1),
            Err(ConstructionError::AlphabetSize {
                size: 255,
                max: 254
            })
        );
    }

    #[test]
    fn test_classify() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(alphabet.classify(Symbol::new(0)), SymbolKind::Letter);
        assert_eq!(alphabet.classify(Symbol::new(2)), SymbolKind::Letter);
        assert_eq!(alphabet.classify(Symbol::new(3)), SymbolKind::Halt);
        assert_eq!(alphabet.classify(Symbol::new(4)), SymbolKind::NoOp);
        assert_eq!(alphabet.classify(Symbol::new(200)), SymbolKind::NoOp);
    }

    #[test]
    fn test_letters() {
        let alphabet = Alphabet::new(3).unwrap();
        let letters: Vec<_> = alphabet.letters().collect();
        assert_eq!(letters, word(&[0, 1, 2]));
    }

    #[test]
    fn test_render_and_parse() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(alphabet.render(&word(&[2, 2, 1, 0, 3, 4])), "ccbaH.");
        assert_eq!(alphabet.parse("cc ba H").unwrap(), word(&[2, 2, 1, 0, 3]));
        assert_eq!(alphabet.parse("").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(
            alphabet.parse("abd"),
            Err(ConstructionError::UnknownGlyph { glyph: 'd' })
        );
        assert_eq!(
            alphabet.parse("a."),
            Err(ConstructionError::UnknownGlyph { glyph: '.' })
        );
    }

    #[test]
    fn test_serde() {
        let alphabet = Alphabet::new(5).unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "5");
        let deserialized: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(alphabet, deserialized);

        assert!(serde_json::from_str::<Alphabet>("0").is_err());
    }
}
