//! Ordered dictionary of target and guessable words

use super::WORDS;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::Path;

/// Error building a dictionary
#[derive(Debug)]
pub enum DictionaryError {
    Empty,
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid {WORD_LENGTH}-letter words"),
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Fixed, ordered collection of words addressed by index
///
/// Indices are stable for the lifetime of the dictionary and are what gets
/// persisted as the target and as play history. Duplicate entries are dropped,
/// keeping the first occurrence.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from words in order
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut unique = Vec::new();
        let mut index = FxHashMap::default();
        for word in words {
            if index.contains_key(word.text()) {
                continue;
            }
            index.insert(word.text().to_string(), unique.len());
            unique.push(word);
        }

        if unique.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// The word list compiled into the binary
    ///
    /// # Panics
    /// Panics if the embedded list is empty, which the build guarantees against.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(WORDS)).expect("embedded word list is not empty")
    }

    /// Load a newline-delimited word list
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::new(load_from_file(path)?)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: an empty dictionary cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Whether `candidate` may be submitted as a guess
    ///
    /// A candidate is valid when it is exactly 5 letters long and appears in
    /// the dictionary. Case is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordham::core::Word;
    /// use wordham::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::new([Word::new("hello").unwrap()]).unwrap();
    /// assert!(dictionary.is_valid_word("HELLO"));
    /// assert!(!dictionary.is_valid_word("HI"));
    /// ```
    #[must_use]
    pub fn is_valid_word(&self, candidate: &str) -> bool {
        candidate.chars().count() == WORD_LENGTH && self.contains(&candidate.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words_from_slice(words)).unwrap()
    }

    #[test]
    fn indexes_in_order() {
        let dict = dictionary(&["crane", "slate", "hello"]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(1).map(Word::text), Some("slate"));
        assert_eq!(dict.index_of("hello"), Some(2));
        assert_eq!(dict.get(3), None);
    }

    #[test]
    fn duplicates_keep_first_index() {
        let dict = dictionary(&["crane", "slate", "crane"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.index_of("crane"), Some(0));
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(Dictionary::new(Vec::new()), Err(DictionaryError::Empty)));
    }

    #[test]
    fn valid_word_checks_length_and_membership() {
        let dict = dictionary(&["hello", "crane"]);
        assert!(dict.is_valid_word("hello"));
        assert!(dict.is_valid_word("HELLO"));
        assert!(!dict.is_valid_word("HI"));
        assert!(!dict.is_valid_word("slate"));
        assert!(!dict.is_valid_word("helloo"));
        assert!(!dict.is_valid_word(""));
    }

    #[test]
    fn embedded_dictionary_is_usable() {
        let dict = Dictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.iter().all(|w| w.text().len() == WORD_LENGTH));
        assert!(dict.is_valid_word("hello"));
    }
}
