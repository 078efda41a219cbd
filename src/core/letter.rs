//! Scored letters and attempts
//!
//! A guess is scored position by position into an [`Attempt`]: an ordered row of
//! [`Letter`]s, each pairing a character with its [`Classification`].
//!
//! On disk a classification is the integer `0`, `1` or `2`, and a letter is a
//! two-element array such as `["e", 1]`.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How a guessed letter relates to the target word
///
/// Ordered from worst to best, so `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Classification {
    /// Letter does not occur in the target (or all its occurrences are used up)
    Absent,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter occurs in the target at this exact position
    Correct,
}

impl From<Classification> for u8 {
    fn from(value: Classification) -> Self {
        match value {
            Classification::Absent => 0,
            Classification::Present => 1,
            Classification::Correct => 2,
        }
    }
}

/// Error for an integer that is not a known classification code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidClassification(pub u8);

impl fmt::Display for InvalidClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid letter classification {}, expected 0, 1 or 2", self.0)
    }
}

impl std::error::Error for InvalidClassification {}

impl TryFrom<u8> for Classification {
    type Error = InvalidClassification;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Absent),
            1 => Ok(Self::Present),
            2 => Ok(Self::Correct),
            other => Err(InvalidClassification(other)),
        }
    }
}

/// A single character of a guess together with its classification
///
/// The classification is `None` until the letter has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter {
    ch: char,
    state: Option<Classification>,
}

impl Letter {
    #[must_use]
    pub const fn new(ch: char, state: Classification) -> Self {
        Self {
            ch,
            state: Some(state),
        }
    }

    /// A letter that has been typed but not yet scored
    #[must_use]
    pub const fn unscored(ch: char) -> Self {
        Self { ch, state: None }
    }

    #[inline]
    #[must_use]
    pub const fn ch(&self) -> char {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> Option<Classification> {
        self.state
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.ch, self.state).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Letter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LetterVisitor;

        impl<'de> Visitor<'de> for LetterVisitor {
            type Value = Letter;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of a character and an optional classification")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Letter, A::Error> {
                let ch: char = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                // A missing second element means the letter was never scored
                let state = seq.next_element::<Option<Classification>>()?.flatten();
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok(Letter { ch, state })
            }
        }

        deserializer.deserialize_seq(LetterVisitor)
    }
}

/// One scored guess: a row of letters as long as the target word
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attempt(Vec<Letter>);

impl Attempt {
    #[must_use]
    pub const fn new(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The guessed word spelled out by this attempt
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(Letter::ch).collect()
    }

    /// True when every letter is in its correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .iter()
                .all(|letter| letter.state == Some(Classification::Correct))
    }
}

impl FromIterator<Letter> for Attempt {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
