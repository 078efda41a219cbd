//! Shape of the durable record and partial updates to it

use crate::core::{Attempt, UsedLetters};
use serde::{Deserialize, Serialize};

/// Progress of the game being played
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub attempts: Vec<Attempt>,
    pub used_letters: UsedLetters,
    /// Seconds spent on the game so far
    pub duration: u64,
}

/// The full durable record
///
/// Every field falls back to its default when missing from the stored JSON,
/// so records written by older versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Storage {
    pub attempts: Vec<Attempt>,
    pub used_letters: UsedLetters,
    pub duration: u64,
    /// Dictionary indices already used as targets in the current cycle
    pub past_words: Vec<usize>,
    /// Target of the game in progress, if any
    pub word_index: Option<usize>,
}

impl Storage {
    #[must_use]
    pub fn game_state(&self) -> GameState {
        GameState {
            attempts: self.attempts.clone(),
            used_letters: self.used_letters.clone(),
            duration: self.duration,
        }
    }

    /// Apply `update` field by field; fields the update leaves as `None` keep their value
    pub fn merge(&mut self, update: StorageUpdate) {
        let StorageUpdate {
            attempts,
            used_letters,
            duration,
            past_words,
            word_index,
        } = update;

        if let Some(attempts) = attempts {
            self.attempts = attempts;
        }
        if let Some(used_letters) = used_letters {
            self.used_letters = used_letters;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(past_words) = past_words {
            self.past_words = past_words;
        }
        if let Some(word_index) = word_index {
            self.word_index = word_index;
        }
    }
}

/// A partial replacement for [`Storage`]
///
/// `word_index` is doubly optional: `None` leaves it alone, `Some(None)`
/// clears it.
///
/// # Examples
/// ```
/// use wordham::store::{Storage, StorageUpdate};
///
/// let mut storage = Storage { duration: 10, ..Storage::default() };
/// storage.merge(StorageUpdate::new().past_words(vec![3]));
///
/// assert_eq!(storage.duration, 10);
/// assert_eq!(storage.past_words, vec![3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct StorageUpdate {
    pub attempts: Option<Vec<Attempt>>,
    pub used_letters: Option<UsedLetters>,
    pub duration: Option<u64>,
    pub past_words: Option<Vec<usize>>,
    pub word_index: Option<Option<usize>>,
}

impl StorageUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(mut self, attempts: Vec<Attempt>) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn used_letters(mut self, used_letters: UsedLetters) -> Self {
        self.used_letters = Some(used_letters);
        self
    }

    pub fn duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn past_words(mut self, past_words: Vec<usize>) -> Self {
        self.past_words = Some(past_words);
        self
    }

    pub fn word_index(mut self, word_index: Option<usize>) -> Self {
        self.word_index = Some(word_index);
        self
    }

    /// Replace the whole game state
    pub fn game_state(self, state: GameState) -> Self {
        self.attempts(state.attempts)
            .used_letters(state.used_letters)
            .duration(state.duration)
    }
}
