//! Target word selection
//!
//! Picks the next target uniformly among the words not yet played in the
//! current cycle. Once every word has been played the history is cleared and
//! a new cycle begins.

mod random;

pub use random::{RandomSource, SequenceRandom, ThreadRandom};

use crate::core::Word;
use crate::store::{StateStore, StorageBackend, StorageUpdate, StoreError};
use crate::wordlists::Dictionary;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

/// The active target word and its dictionary index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedWord {
    pub word_index: usize,
    pub word: Word,
}

/// Chooses target words from a dictionary
#[derive(Debug)]
pub struct WordSelector<'d, R> {
    dictionary: &'d Dictionary,
    random: R,
}

impl<'d, R: RandomSource> WordSelector<'d, R> {
    pub const fn new(dictionary: &'d Dictionary, random: R) -> Self {
        Self { dictionary, random }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Pick the target for a game
    ///
    /// A `forced_index` resumes a game in progress and is returned as is. An
    /// index outside the dictionary is ignored and a fresh word is picked.
    ///
    /// Otherwise the pick avoids every index in `past_words`. When
    /// `past_words` covers the whole dictionary the stored history is cleared
    /// before picking from the full range.
    ///
    /// # Errors
    /// Returns an error only if clearing the stored history fails.
    pub fn pick_word<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        past_words: &[usize],
        forced_index: Option<usize>,
    ) -> Result<PickedWord, StoreError> {
        if let Some(index) = forced_index {
            if let Some(word) = self.dictionary.get(index) {
                debug!("Resuming word index {index}");
                return Ok(PickedWord {
                    word_index: index,
                    word: word.clone(),
                });
            }
            warn!(
                "Stored word index {index} is outside the {}-word dictionary, picking anew",
                self.dictionary.len()
            );
        }

        self.pick_fresh(store, past_words)
    }

    fn pick_fresh<B: StorageBackend>(
        &mut self,
        store: &mut StateStore<B>,
        past_words: &[usize],
    ) -> Result<PickedWord, StoreError> {
        let dictionary = self.dictionary;
        let total = dictionary.len();

        if past_words.is_empty() {
            return Ok(self.draw(dictionary.iter().enumerate()));
        }

        // Fewer entries than words, so at least one index is always eligible
        if past_words.len() < total {
            let played: FxHashSet<usize> = past_words.iter().copied().collect();
            let eligible: Vec<(usize, &Word)> = dictionary
                .iter()
                .enumerate()
                .filter(|(i, _)| !played.contains(i))
                .collect();
            debug!("{} of {total} words left in this cycle", eligible.len());
            return Ok(self.draw(eligible));
        }

        // Every word has been played, or the history is longer than the dictionary
        info!("All {total} words played, clearing history");
        store.write(StorageUpdate::new().past_words(Vec::new()))?;
        Ok(self.draw(dictionary.iter().enumerate()))
    }

    /// Uniform choice among non-empty `candidates`
    fn draw<'w>(&mut self, candidates: impl IntoIterator<Item = (usize, &'w Word)>) -> PickedWord {
        let candidates: Vec<_> = candidates.into_iter().collect();
        let (word_index, word) = candidates[self.random.next_index(candidates.len())];
        PickedWord {
            word_index,
            word: word.clone(),
        }
    }
}
