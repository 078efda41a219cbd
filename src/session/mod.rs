//! A single game from start to finish
//!
//! The session picks (or resumes) the target, validates and scores guesses,
//! mirrors progress into the state store after every change and pushes it to
//! the observable [`SessionSlots`].

mod slots;

pub use slots::{SessionSlots, Slot, SubscriptionId};

use crate::core::{Attempt, UsedLetters, WORD_LENGTH, Word, score};
use crate::output::formatters::share_text;
use crate::selector::{PickedWord, RandomSource, WordSelector};
use crate::store::{GameState, StateStore, Storage, StorageBackend, StorageUpdate, StoreError};
use crate::wordlists::Dictionary;
use log::{debug, info};
use std::fmt;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    GameOver,
    WrongLength(usize),
    NotInWordList(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::WrongLength(len) => {
                write!(f, "Guess must be {WORD_LENGTH} letters, got {len}")
            }
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Error from a session operation
#[derive(Debug)]
pub enum SessionError {
    /// The guess was rejected; nothing changed
    Rejected(GuessError),
    Store(StoreError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "{e}"),
            Self::Store(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}

impl From<GuessError> for SessionError {
    fn from(e: GuessError) -> Self {
        Self::Rejected(e)
    }
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub attempt: Attempt,
    /// Set when this guess ended the game
    pub outcome: Option<Outcome>,
}

/// One game, bound to a dictionary and a state store
#[derive(Debug)]
pub struct Session<'d, B, R> {
    selector: WordSelector<'d, R>,
    store: StateStore<B>,
    picked: PickedWord,
    state: GameState,
    outcome: Option<Outcome>,
    slots: SessionSlots,
}

impl<'d, B: StorageBackend, R: RandomSource> Session<'d, B, R> {
    /// Resume the stored game in progress, or start a new one
    ///
    /// # Errors
    /// Fails if the stored record is corrupt or cannot be written, or if a
    /// resumed game holds attempts of the wrong length.
    pub fn start(
        dictionary: &'d Dictionary,
        mut store: StateStore<B>,
        random: R,
    ) -> Result<Self, StoreError> {
        let mut selector = WordSelector::new(dictionary, random);
        let storage = store.read()?;
        let (picked, state) = Self::begin(&mut selector, &mut store, &storage)?;

        let mut session = Self {
            selector,
            store,
            picked,
            state,
            outcome: None,
            slots: SessionSlots::default(),
        };
        session.publish();

        // A stored game that already reached its end is closed off now
        if let Some(outcome) = session.evaluate() {
            session.finish(outcome)?;
        }
        Ok(session)
    }

    /// Start the next game once the current one is over
    ///
    /// Returns false, changing nothing, while a game is still in progress.
    ///
    /// # Errors
    /// Fails if the state store cannot be read or written.
    pub fn next_game(&mut self) -> Result<bool, StoreError> {
        if self.outcome.is_none() {
            return Ok(false);
        }
        let storage = self.store.read()?;
        let (picked, state) = Self::begin(&mut self.selector, &mut self.store, &storage)?;
        self.picked = picked;
        self.state = state;
        self.outcome = None;
        self.slots.current_attempt.set(String::new());
        self.publish();
        Ok(true)
    }

    fn begin(
        selector: &mut WordSelector<'d, R>,
        store: &mut StateStore<B>,
        storage: &Storage,
    ) -> Result<(PickedWord, GameState), StoreError> {
        let picked = selector.pick_word(store, &storage.past_words, storage.word_index)?;

        if storage.word_index == Some(picked.word_index) {
            if let Some(bad) = storage.attempts.iter().find(|a| a.len() != WORD_LENGTH) {
                return Err(StoreError::Invalid(format!(
                    "attempt '{}' has {} letters, expected {WORD_LENGTH}",
                    bad.word(),
                    bad.len()
                )));
            }
            info!(
                "Resuming game {} with {} attempts",
                picked.word_index,
                storage.attempts.len()
            );
            return Ok((picked, storage.game_state()));
        }

        info!("Starting game {}", picked.word_index);
        let state = GameState::default();
        store.write(
            StorageUpdate::new()
                .word_index(Some(picked.word_index))
                .game_state(state.clone()),
        )?;
        Ok((picked, state))
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the session and the store untouched.
    ///
    /// # Errors
    /// Returns `SessionError::Rejected` for a guess that is not allowed and
    /// `SessionError::Store` if progress cannot be saved.
    pub fn submit(&mut self, guess: &str) -> Result<Submission, SessionError> {
        if self.outcome.is_some() {
            return Err(GuessError::GameOver.into());
        }
        let length = guess.chars().count();
        if length != WORD_LENGTH {
            return Err(GuessError::WrongLength(length).into());
        }
        if !self.selector.dictionary().is_valid_word(guess) {
            return Err(GuessError::NotInWordList(guess.to_lowercase()).into());
        }
        let guess = Word::new(guess).map_err(|_| GuessError::NotInWordList(guess.to_lowercase()))?;

        let attempt = score(&guess, &self.picked.word);
        debug!("Scored {guess} as {attempt:?}");

        let mut attempts = self.state.attempts.clone();
        attempts.push(attempt.clone());
        let mut used_letters = self.state.used_letters.clone();
        used_letters.record(&attempt);

        self.store.write(
            StorageUpdate::new()
                .attempts(attempts.clone())
                .used_letters(used_letters.clone()),
        )?;
        self.state.attempts = attempts;
        self.state.used_letters = used_letters;
        self.publish();

        let outcome = self.evaluate();
        if let Some(outcome) = outcome {
            self.finish(outcome)?;
        }
        Ok(Submission { attempt, outcome })
    }

    /// Add one letter to the guess being composed
    ///
    /// Returns false if the letter was not accepted: not an ASCII letter, the
    /// guess is already full, or the game is over.
    pub fn type_letter(&mut self, ch: char) -> bool {
        let full = self.slots.current_attempt.get().chars().count() >= WORD_LENGTH;
        if self.outcome.is_some() || full || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.slots
            .current_attempt
            .update(|current| current.push(ch.to_ascii_lowercase()));
        true
    }

    /// Remove the last typed letter, returning it
    pub fn backspace(&mut self) -> Option<char> {
        let mut removed = None;
        if !self.slots.current_attempt.get().is_empty() {
            self.slots
                .current_attempt
                .update(|current| removed = current.pop());
        }
        removed
    }

    /// Submit the composed guess, clearing it if accepted
    ///
    /// # Errors
    /// Same as [`Session::submit`]. A rejected guess stays composed.
    pub fn submit_current(&mut self) -> Result<Submission, SessionError> {
        let guess = self.slots.current_attempt.get().clone();
        let submission = self.submit(&guess)?;
        self.slots.current_attempt.set(String::new());
        Ok(submission)
    }

    /// Add `elapsed` seconds to the game clock
    ///
    /// Any amount is accepted; nothing is added once the game is over.
    ///
    /// # Errors
    /// Fails if the new duration cannot be saved.
    pub fn tick(&mut self, elapsed: u64) -> Result<(), StoreError> {
        if self.outcome.is_some() || elapsed == 0 {
            return Ok(());
        }
        let duration = self.state.duration.saturating_add(elapsed);
        self.store.write(StorageUpdate::new().duration(duration))?;
        self.state.duration = duration;
        self.slots.duration.set(duration);
        Ok(())
    }

    fn evaluate(&self) -> Option<Outcome> {
        if self.state.attempts.last().is_some_and(Attempt::is_solved) {
            Some(Outcome::Won)
        } else if self.state.attempts.len() >= MAX_ATTEMPTS {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    /// Record the target as played and release it so the next start picks anew
    ///
    /// The outcome is set before the history write, so a failed write cannot
    /// reopen a finished game.
    fn finish(&mut self, outcome: Outcome) -> Result<(), StoreError> {
        self.outcome = Some(outcome);
        let index = self.picked.word_index;
        self.store.write(move |current: &Storage| {
            let mut past_words = current.past_words.clone();
            if !past_words.contains(&index) {
                past_words.push(index);
            }
            StorageUpdate::new()
                .past_words(past_words)
                .word_index(None)
        })?;
        info!(
            "Game {index} {} after {} attempts",
            if outcome == Outcome::Won { "won" } else { "lost" },
            self.state.attempts.len()
        );
        Ok(())
    }

    fn publish(&mut self) {
        self.slots.attempts.set(self.state.attempts.clone());
        self.slots.used_letters.set(self.state.used_letters.clone());
        self.slots.duration.set(self.state.duration);
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.picked.word
    }

    #[must_use]
    pub const fn word_index(&self) -> usize {
        self.picked.word_index
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.state.attempts
    }

    #[must_use]
    pub const fn used_letters(&self) -> &UsedLetters {
        &self.state.used_letters
    }

    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.state.duration
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.state.attempts.len())
    }

    #[must_use]
    pub const fn slots(&self) -> &SessionSlots {
        &self.slots
    }

    pub const fn slots_mut(&mut self) -> &mut SessionSlots {
        &mut self.slots
    }

    #[must_use]
    pub const fn store(&self) -> &StateStore<B> {
        &self.store
    }

    /// Shareable summary, available once the game is over
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.outcome.map(|outcome| {
            share_text(
                &self.state.attempts,
                outcome == Outcome::Won,
                MAX_ATTEMPTS,
                self.state.duration,
            )
        })
    }
}
