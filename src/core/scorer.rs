//! Guess scoring
//!
//! Compares a guess against the target and classifies every position,
//! including proper handling of duplicate letters.

use super::letter::{Attempt, Classification, Letter};
use super::word::{WORD_LENGTH, Word};

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches as correct and remove them from
///    the pool of available target letters
/// 2. Second pass: mark remaining letters as present while the pool still has
///    an unused occurrence, otherwise absent
///
/// A letter is therefore never reported present or correct more times than it
/// occurs in the target.
///
/// # Examples
/// ```
/// use wordham::core::{Classification, Word, score};
///
/// let guess = Word::new("erase").unwrap();
/// let target = Word::new("speed").unwrap();
/// let attempt = score(&guess, &target);
///
/// let states: Vec<_> = attempt.letters().iter().map(|l| l.state().unwrap()).collect();
/// assert_eq!(states[0], Classification::Present); // e
/// assert_eq!(states[1], Classification::Absent); // r
/// assert_eq!(states[4], Classification::Present); // e
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Attempt {
    let mut result = [Classification::Absent; WORD_LENGTH];
    let mut target_available = target.char_counts();
    let guess_chars = guess.chars();
    let target_chars = target.chars();

    for (i, (&g, &t)) in guess_chars.iter().zip(target_chars).enumerate() {
        if g == t {
            result[i] = Classification::Correct;
            if let Some(count) = target_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess_chars.iter().enumerate() {
        if result[i] == Classification::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&g)
            && *count > 0
        {
            result[i] = Classification::Present;
            *count -= 1;
        }
    }

    guess_chars
        .iter()
        .zip(result)
        .map(|(&ch, state)| Letter::new(char::from(ch), state))
        .collect()
}
