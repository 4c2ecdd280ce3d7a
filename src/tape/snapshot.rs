//! Point-in-time copy of a tape's live word and flags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Alphabet, Symbol};

/// Snapshot of a tape.
///
/// Independent of the tape's capacity, so snapshots from tapes of different
/// sizes can be compared and stored together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TapeSnapshot {
    /// Live word at capture time.
    /// SmallVec keeps short words inline.
    pub symbols: SmallVec<[Symbol; 16]>,

    pub running: bool,

    pub has_space: bool,

    pub remaining_capacity: usize,
}

impl TapeSnapshot {
    /// Create a snapshot.
    #[must_use]
    pub fn new(live: &[Symbol], running: bool, has_space: bool, remaining_capacity: usize) -> Self {
        Self {
            symbols: SmallVec::from_slice(live),
            running,
            has_space,
            remaining_capacity,
        }
    }

    /// Number of live symbols captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Was the live word empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Render the word with an alphabet's glyphs.
    #[must_use]
    pub fn render(&self, alphabet: Alphabet) -> String {
        alphabet.render(&self.symbols)
    }
}

/// Prints raw letters with no alphabet: the halting symbol and fillers show
/// as ordinary letters, and values past `z` all print as `?`. Use `render`
/// for an unambiguous word.
impl std::fmt::Display for TapeSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word;

    #[test]
    fn test_display_and_render() {
        let snapshot = TapeSnapshot::new(&word(&[2, 0, 3]), false, true, 10);
        assert_eq!(snapshot.to_string(), "cad");

        let alphabet = Alphabet::new(3).unwrap();
        assert_eq!(snapshot.render(alphabet), "caH");
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_display_is_alphabet_free() {
        let halted = TapeSnapshot::new(&word(&[26]), false, true, 0);
        let filler = TapeSnapshot::new(&word(&[27]), false, true, 0);

        // Without an alphabet both print the same.
        assert_eq!(halted.to_string(), filler.to_string());

        let alphabet = Alphabet::new(26).unwrap();
        assert_eq!(halted.render(alphabet), "H");
        assert_eq!(filler.render(alphabet), ".");
    }

    #[test]
    fn test_serde() {
        let snapshot = TapeSnapshot::new(&word(&[0, 1]), true, false, 0);
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: TapeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
