//! Commands that inspect or edit the stored history

use crate::core::Attempt;
use crate::output::share_text;
use crate::session::MAX_ATTEMPTS;
use crate::store::{StateStore, Storage, StorageBackend, StorageUpdate};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Share text for the last finished game, if there is one
///
/// A game still in progress has nothing to share yet.
#[must_use]
pub fn last_game_share(storage: &Storage) -> Option<String> {
    if storage.word_index.is_some() || storage.attempts.is_empty() {
        return None;
    }
    let solved = storage.attempts.last().is_some_and(Attempt::is_solved);
    Some(share_text(
        &storage.attempts,
        solved,
        MAX_ATTEMPTS,
        storage.duration,
    ))
}

/// Print the share text of the last finished game
///
/// # Errors
///
/// Returns an error if the saved game cannot be read or output fails.
pub fn run_share<B: StorageBackend, W: Write>(store: &StateStore<B>, out: &mut W) -> Result<()> {
    let storage = store.read().context("Failed to load saved game")?;
    match last_game_share(&storage) {
        Some(text) => writeln!(out, "{text}")?,
        None if storage.word_index.is_some() => {
            writeln!(out, "A game is in progress. Finish it to share your result.")?;
        }
        None => writeln!(out, "No finished game to share yet.")?,
    }
    Ok(())
}

/// Print the game in progress and how far through the word list play has got
///
/// # Errors
///
/// Returns an error if the saved game cannot be read or output fails.
pub fn run_status<B: StorageBackend, W: Write>(
    store: &StateStore<B>,
    dictionary: &Dictionary,
    out: &mut W,
) -> Result<()> {
    let storage = store.read().context("Failed to load saved game")?;

    match storage.word_index {
        Some(index) => writeln!(
            out,
            "Game #{index} in progress: {}/{MAX_ATTEMPTS} guesses used",
            storage.attempts.len()
        )?,
        None => writeln!(out, "No game in progress")?,
    }
    writeln!(
        out,
        "Words played this cycle: {}/{}",
        storage.past_words.len(),
        dictionary.len()
    )?;
    Ok(())
}

/// Forget which words have been played
///
/// # Errors
///
/// Returns an error if the saved game cannot be read or written.
pub fn run_reset_history<B: StorageBackend, W: Write>(
    store: &mut StateStore<B>,
    out: &mut W,
) -> Result<()> {
    store
        .write(StorageUpdate::new().past_words(Vec::new()))
        .context("Failed to reset history")?;
    info!("Play history cleared");
    writeln!(out, "History cleared.")?;
    Ok(())
}
