//! Bounded symbol tape.
//!
//! The tape is the machine's only storage: a fixed array with a read cursor
//! and a write cursor. A tag system needs just two mutations from it:
//!
//! - `remove_two`: read the two oldest live symbols
//! - `append`: write a production word after the tail
//!
//! Running out of data or out of room is not an error. Both are recorded in
//! sticky flags that the caller reads between steps:
//!
//! ```
//! use rust_tag::core::{word, Symbol};
//! use rust_tag::tape::Tape;
//!
//! let mut tape = Tape::<3>::new(&word(&[0, 0, 0])).unwrap();
//! tape.remove_two();
//! tape.append(&word(&[1, 2]), Symbol::new(4));
//!
//! assert!(tape.is_running());
//! assert!(!tape.has_space_remaining());
//! ```

mod bounded;
mod snapshot;

pub use bounded::Tape;
pub use snapshot::TapeSnapshot;
