//! Interactive play mode
//!
//! Line-based game loop: one guess per line, board and keyboard redrawn after
//! every accepted guess.

use crate::output::{print_board, print_result, render_keyboard};
use crate::selector::RandomSource;
use crate::session::{MAX_ATTEMPTS, Outcome, Session, SessionError};
use crate::store::StorageBackend;
use anyhow::Result;
use colored::Colorize;
use log::debug;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

enum Command {
    Quit,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        guess => Command::Guess(guess.to_string()),
    }
}

/// Run the interactive game until the player quits or input ends
///
/// The clock advances by the wall-clock time between inputs. Quitting keeps
/// the game in progress so the next run resumes it.
///
/// # Errors
///
/// Returns an error if reading input, writing output or saving progress fails.
pub fn run_play<B, R, I, W>(
    session: &mut Session<'_, B, R>,
    mut input: I,
    out: &mut W,
) -> Result<()>
where
    B: StorageBackend,
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    if session.is_over() {
        session.next_game()?;
    }

    writeln!(out, "\n{}", "Wordham".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {MAX_ATTEMPTS} tries. Type 'quit' to stop.",
        session.word().text().len()
    )?;
    draw(session, out)?;

    let mut last_tick = Instant::now();

    loop {
        let Some(line) = prompt(
            &mut input,
            out,
            &format!("Guess {}/{MAX_ATTEMPTS}", session.attempts().len() + 1),
        )?
        else {
            break;
        };

        let elapsed = last_tick.elapsed().as_secs();
        session.tick(elapsed)?;
        last_tick += Duration::from_secs(elapsed);

        let guess = match parse_command(&line) {
            Command::Quit => break,
            Command::Guess(guess) => guess,
        };

        match session.submit(&guess) {
            Ok(submission) => {
                draw(session, out)?;
                if let Some(outcome) = submission.outcome {
                    finish(session, outcome, out)?;
                    if !play_again(&mut input, out)? {
                        break;
                    }
                    session.next_game()?;
                    writeln!(out, "\n🔄 New game started!")?;
                    draw(session, out)?;
                    last_tick = Instant::now();
                }
            }
            Err(SessionError::Rejected(reason)) => {
                debug!("Rejected guess {guess:?}: {reason}");
                writeln!(out, "{} {reason}", "❌".red())?;
            }
            Err(SessionError::Store(e)) => return Err(e.into()),
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn draw<B, R, W>(session: &Session<'_, B, R>, out: &mut W) -> Result<()>
where
    B: StorageBackend,
    R: RandomSource,
    W: Write,
{
    print_board(out, session.attempts(), MAX_ATTEMPTS)?;
    writeln!(out, "{}\n", render_keyboard(session.used_letters()))?;
    Ok(())
}

fn finish<B, R, W>(session: &Session<'_, B, R>, outcome: Outcome, out: &mut W) -> Result<()>
where
    B: StorageBackend,
    R: RandomSource,
    W: Write,
{
    let share = session.share_text().unwrap_or_default();
    print_result(
        out,
        session.word().text(),
        outcome == Outcome::Won,
        session.duration(),
        &share,
    )?;
    Ok(())
}

fn play_again<I: BufRead, W: Write>(input: &mut I, out: &mut W) -> Result<bool> {
    let answer = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Print a prompt and read one trimmed line, or `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
