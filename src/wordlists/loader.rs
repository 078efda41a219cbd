//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entry that is not a 5-letter ASCII word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-delimited words, skipping invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordham::wordlists::loader::words_from_slice;
/// use wordham::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_trims_and_lowercases() {
        let words = words_from_lines("  CRANE \n\nsl4te\nirate\n");
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "irate"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("wordham_loader_test.txt");
        fs::write(&path, "apple\ngrape\nlemon\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "lemon");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let path = std::env::temp_dir().join("wordham_loader_missing.txt");
        let _ = fs::remove_file(&path);
        assert!(load_from_file(&path).is_err());
    }
}
