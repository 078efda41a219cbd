//! Best-known state of every letter guessed during a session

use super::letter::{Attempt, Classification};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from character to the best classification seen for it
///
/// A letter is never downgraded: once it is known to be correct, later
/// attempts that mark it present or absent leave it correct.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedLetters(BTreeMap<char, Classification>);

impl UsedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, ch: char) -> Option<Classification> {
        self.0.get(&ch).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        self.0.iter().map(|(&ch, &state)| (ch, state))
    }

    /// Record one letter, keeping the existing state unless `state` is strictly better
    pub fn record_letter(&mut self, ch: char, state: Classification) {
        self.0
            .entry(ch)
            .and_modify(|best| *best = (*best).max(state))
            .or_insert(state);
    }

    /// Fold every scored letter of `attempt` into the mapping
    ///
    /// Unscored letters are skipped.
    pub fn record(&mut self, attempt: &Attempt) {
        for letter in attempt.letters() {
            if let Some(state) = letter.state() {
                self.record_letter(letter.ch(), state);
            }
        }
    }
}

impl FromIterator<(char, Classification)> for UsedLetters {
    fn from_iter<I: IntoIterator<Item = (char, Classification)>>(iter: I) -> Self {
        let mut used = Self::new();
        for (ch, state) in iter {
            used.record_letter(ch, state);
        }
        used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word, score};
    use Classification::{Absent, Correct, Present};

    #[test]
    fn record_new_letters() {
        let mut used = UsedLetters::new();
        used.record(&score(&Word::new("crane").unwrap(), &Word::new("slate").unwrap()));

        assert_eq!(used.len(), 5);
        assert_eq!(used.get('a'), Some(Correct));
        assert_eq!(used.get('c'), Some(Absent));
        assert_eq!(used.get('z'), None);
    }

    #[test]
    fn never_downgrades() {
        let mut used = UsedLetters::new();
        used.record_letter('e', Correct);
        used.record_letter('e', Present);
        used.record_letter('e', Absent);
        assert_eq!(used.get('e'), Some(Correct));

        used.record_letter('s', Present);
        used.record_letter('s', Absent);
        assert_eq!(used.get('s'), Some(Present));
    }

    #[test]
    fn upgrades_when_strictly_better() {
        let mut used = UsedLetters::new();
        used.record_letter('r', Absent);
        used.record_letter('r', Present);
        assert_eq!(used.get('r'), Some(Present));
        used.record_letter('r', Correct);
        assert_eq!(used.get('r'), Some(Correct));
    }

    #[test]
    fn correct_survives_later_attempts() {
        let target = Word::new("speed").unwrap();
        let mut used = UsedLetters::new();

        // The first E of SPEED is in place
        used.record(&score(&Word::new("sheet").unwrap(), &target));
        assert_eq!(used.get('e'), Some(Correct));

        // ERASE only finds E's out of position
        used.record(&score(&Word::new("erase").unwrap(), &target));
        assert_eq!(used.get('e'), Some(Correct));
    }

    #[test]
    fn skips_unscored_letters() {
        let mut used = UsedLetters::new();
        used.record(&Attempt::new(vec![Letter::unscored('x'), Letter::new('y', Present)]));
        assert_eq!(used.get('x'), None);
        assert_eq!(used.get('y'), Some(Present));
    }

    #[test]
    fn serializes_as_object() {
        let used: UsedLetters = [('b', Absent), ('a', Correct)].into_iter().collect();
        assert_eq!(serde_json::to_string(&used).unwrap(), r#"{"a":2,"b":0}"#);

        let parsed: UsedLetters = serde_json::from_str(r#"{"q":1}"#).unwrap();
        assert_eq!(parsed.get('q'), Some(Present));
    }
}
