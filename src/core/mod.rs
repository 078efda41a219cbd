//! Core domain types for the game
//!
//! Words, scored letters and the scoring algorithm. Everything here is pure
//! and free of I/O.

mod letter;
mod scorer;
mod used_letters;
mod word;

pub use letter::{Attempt, Classification, InvalidClassification, Letter};
pub use scorer::score;
pub use used_letters::UsedLetters;
pub use word::{WORD_LENGTH, Word, WordError};
