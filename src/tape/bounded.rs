//! Fixed-capacity tape.

use tracing::debug;

use crate::core::Symbol;
use crate::error::ConstructionError;

use super::snapshot::TapeSnapshot;

/// Fixed-capacity FIFO tape with sticky halt and overflow flags.
///
/// Storage is a single inline array allocated at construction. The live word
/// is the window `cells[head..end]`; `head` only moves forward as symbols are
/// read and `end` only moves forward as symbols are written. Nothing wraps
/// around, so `CAPACITY` bounds the total number of symbols a run may ever
/// write, not just the live length.
///
/// ## Invariants
///
/// 1. `head <= end <= CAPACITY`
/// 2. Cells outside `head..end` are stale and never read as live data
/// 3. `running` and `has_space` only ever go from `true` to `false`
///
/// ## Example
///
/// ```
/// use rust_tag::core::{word, Symbol};
/// use rust_tag::tape::Tape;
///
/// let mut tape = Tape::<8>::new(&word(&[0, 1, 2])).unwrap();
/// assert_eq!(tape.remove_two(), Some((Symbol::new(0), Symbol::new(1))));
/// assert_eq!(tape.len(), 1);
/// assert_eq!(tape.remaining_capacity(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Tape<const CAPACITY: usize> {
    cells: [Symbol; CAPACITY],
    /// Index of the first live symbol.
    head: usize,
    /// One past the last live symbol.
    end: usize,
    running: bool,
    has_space: bool,
}

impl<const CAPACITY: usize> Tape<CAPACITY> {
    /// Create a tape holding `word`.
    ///
    /// Fails if the word is empty or longer than `CAPACITY`.
    pub fn new(word: &[Symbol]) -> Result<Self, ConstructionError> {
        if word.is_empty() {
            return Err(ConstructionError::EmptyWord);
        }
        if word.len() > CAPACITY {
            return Err(ConstructionError::WordTooLong {
                len: word.len(),
                capacity: CAPACITY,
            });
        }

        let mut cells = [Symbol::default(); CAPACITY];
        cells[..word.len()].copy_from_slice(word);

        Ok(Self {
            cells,
            head: 0,
            end: word.len(),
            running: true,
            has_space: true,
        })
    }

    /// Create a tape from the first `live_len` symbols of `buffer`.
    ///
    /// The rest of the buffer is ignored.
    pub fn from_buffer(buffer: &[Symbol], live_len: usize) -> Result<Self, ConstructionError> {
        if live_len > buffer.len() {
            return Err(ConstructionError::LiveLengthExceedsBuffer {
                live: live_len,
                available: buffer.len(),
            });
        }
        Self::new(&buffer[..live_len])
    }

    /// Remove the two oldest live symbols.
    ///
    /// With fewer than two live symbols nothing is removed, the tape stops
    /// running, and `None` is returned.
    pub fn remove_two(&mut self) -> Option<(Symbol, Symbol)> {
        if self.end - self.head < 2 {
            if self.running {
                debug!(live = self.len(), "tape starved");
            }
            self.running = false;
            return None;
        }

        let pair = (self.cells[self.head], self.cells[self.head + 1]);
        self.head += 2;
        Some(pair)
    }

    /// Write one symbol after the tail.
    ///
    /// Returns `false` when the tape is full. Does not touch `has_space`;
    /// `append` records exhaustion.
    pub fn push(&mut self, symbol: Symbol) -> bool {
        if self.end == CAPACITY {
            return false;
        }
        self.cells[self.end] = symbol;
        self.end += 1;
        true
    }

    /// Append `word` up to the first `terminator`.
    ///
    /// Stops at the first failed push and marks the tape as out of space for
    /// good. Returns the number of symbols written.
    pub fn append(&mut self, word: &[Symbol], terminator: Symbol) -> usize {
        let mut written = 0;
        for &symbol in word.iter().take_while(|&&s| s != terminator) {
            if !self.push(symbol) {
                if self.has_space {
                    debug!(capacity = CAPACITY, written, "tape out of space");
                }
                self.has_space = false;
                break;
            }
            written += 1;
        }
        written
    }

    /// Stop the tape. Used when the halting symbol is read.
    pub(crate) fn halt(&mut self) {
        self.running = false;
    }

    /// Can computation still proceed?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Has every append so far fit?
    #[must_use]
    pub fn has_space_remaining(&self) -> bool {
        self.has_space
    }

    /// Number of cells that can still be written.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        CAPACITY - self.end
    }

    /// Total number of cells.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Number of live symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.head
    }

    /// Is the live word empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head == self.end
    }

    /// The live word.
    #[must_use]
    pub fn live(&self) -> &[Symbol] {
        &self.cells[self.head..self.end]
    }

    /// Number of symbols consumed so far (the head index).
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.head
    }

    /// Index of the last live symbol, or `None` when the live word is empty.
    #[must_use]
    pub fn tail(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Capture the live word and flags.
    #[must_use]
    pub fn snapshot(&self) -> TapeSnapshot {
        TapeSnapshot::new(
            self.live(),
            self.running,
            self.has_space,
            self.remaining_capacity(),
        )
    }
}

/// Prints the live word as raw letters; see `TapeSnapshot`'s `Display`.
/// `TagEngine::render` gives glyphs that distinguish the halting symbol.
impl<const CAPACITY: usize> std::fmt::Display for Tape<CAPACITY> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in self.live() {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::word;

    const STOP: Symbol = Symbol::new(9);

    #[test]
    fn test_new() {
        let tape = Tape::<8>::new(&word(&[0, 1, 2])).unwrap();
        assert_eq!(tape.live(), &word(&[0, 1, 2])[..]);
        assert_eq!(tape.len(), 3);
        assert_eq!(tape.consumed(), 0);
        assert_eq!(tape.tail(), Some(2));
        assert_eq!(tape.remaining_capacity(), 5);
        assert_eq!(tape.capacity(), 8);
        assert!(tape.is_running());
        assert!(tape.has_space_remaining());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Tape::<8>::new(&[]).unwrap_err(), ConstructionError::EmptyWord);
    }

    #[test]
    fn test_new_rejects_oversized() {
        assert_eq!(
            Tape::<2>::new(&word(&[0, 0, 0])).unwrap_err(),
            ConstructionError::WordTooLong { len: 3, capacity: 2 }
        );
    }

    #[test]
    fn test_exact_fit() {
        let tape = Tape::<3>::new(&word(&[0, 0, 0])).unwrap();
        assert_eq!(tape.remaining_capacity(), 0);
        assert!(tape.has_space_remaining());
    }

    #[test]
    fn test_from_buffer() {
        let mut buffer = [Symbol::default(); 16];
        buffer[..4].copy_from_slice(&word(&[1, 0, 0, 2]));

        let tape = Tape::<16>::from_buffer(&buffer, 3).unwrap();
        assert_eq!(tape.live(), &word(&[1, 0, 0])[..]);

        assert_eq!(
            Tape::<16>::from_buffer(&buffer, 0).unwrap_err(),
            ConstructionError::EmptyWord
        );
        assert_eq!(
            Tape::<16>::from_buffer(&buffer, 17).unwrap_err(),
            ConstructionError::LiveLengthExceedsBuffer { live: 17, available: 16 }
        );
        assert_eq!(
            Tape::<8>::from_buffer(&buffer, 12).unwrap_err(),
            ConstructionError::WordTooLong { len: 12, capacity: 8 }
        );
    }

    #[test]
    fn test_remove_two() {
        let mut tape = Tape::<8>::new(&word(&[0, 1, 2, 0])).unwrap();

        assert_eq!(tape.remove_two(), Some((Symbol::new(0), Symbol::new(1))));
        assert_eq!(tape.live(), &word(&[2, 0])[..]);
        assert_eq!(tape.consumed(), 2);

        assert_eq!(tape.remove_two(), Some((Symbol::new(2), Symbol::new(0))));
        assert!(tape.is_empty());
        assert_eq!(tape.tail(), None);
        assert!(tape.is_running());
    }

    #[test]
    fn test_remove_two_starves() {
        let mut tape = Tape::<8>::new(&word(&[0])).unwrap();
        assert_eq!(tape.remove_two(), None);
        assert!(!tape.is_running());
        // Nothing consumed.
        assert_eq!(tape.live(), &word(&[0])[..]);
    }

    #[test]
    fn test_push() {
        let mut tape = Tape::<2>::new(&word(&[0])).unwrap();
        assert!(tape.push(Symbol::new(1)));
        assert!(!tape.push(Symbol::new(2)));
        assert_eq!(tape.live(), &word(&[0, 1])[..]);
        // Push alone does not record exhaustion.
        assert!(tape.has_space_remaining());
    }

    #[test]
    fn test_append_stops_at_terminator() {
        let mut tape = Tape::<8>::new(&word(&[0])).unwrap();
        let written = tape.append(&word(&[1, 2, 9, 1, 1]), STOP);
        assert_eq!(written, 2);
        assert_eq!(tape.live(), &word(&[0, 1, 2])[..]);
        assert!(tape.has_space_remaining());
    }

    #[test]
    fn test_append_truncates() {
        let mut tape = Tape::<4>::new(&word(&[0, 0])).unwrap();
        let written = tape.append(&word(&[1, 2, 1]), STOP);
        assert_eq!(written, 2);
        assert_eq!(tape.live(), &word(&[0, 0, 1, 2])[..]);
        assert!(!tape.has_space_remaining());
        assert!(tape.is_running());
    }

    #[test]
    fn test_overflow_is_sticky() {
        let mut tape = Tape::<3>::new(&word(&[0, 0, 0])).unwrap();
        tape.append(&word(&[1]), STOP);
        assert!(!tape.has_space_remaining());

        tape.remove_two();
        // Freed head cells are not reused.
        assert_eq!(tape.append(&word(&[1]), STOP), 0);
        assert!(!tape.has_space_remaining());
    }

    #[test]
    fn test_empty_append_keeps_space() {
        let mut tape = Tape::<1>::new(&word(&[0])).unwrap();
        assert_eq!(tape.append(&word(&[9, 1]), STOP), 0);
        assert!(tape.has_space_remaining());
    }

    #[test]
    fn test_halt() {
        let mut tape = Tape::<4>::new(&word(&[0, 1])).unwrap();
        tape.halt();
        assert!(!tape.is_running());
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn test_display() {
        let mut tape = Tape::<8>::new(&word(&[1, 0, 0])).unwrap();
        assert_eq!(tape.to_string(), "baa");
        tape.remove_two();
        assert_eq!(tape.to_string(), "a");
    }
}
