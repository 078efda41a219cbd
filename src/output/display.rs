//! Terminal rendering of the board, keyboard and results

use super::formatters::parse_duration;
use crate::core::{Attempt, Classification, UsedLetters, WORD_LENGTH};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

fn tile(ch: char, state: Option<Classification>) -> ColoredString {
    let text = format!(" {} ", ch.to_ascii_uppercase());
    match state {
        Some(Classification::Correct) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// One attempt as a row of colored tiles
#[must_use]
pub fn render_attempt(attempt: &Attempt) -> String {
    attempt
        .letters()
        .iter()
        .map(|letter| tile(letter.ch(), letter.state()).to_string())
        .collect()
}

/// The keyboard with every used letter colored by its best state
#[must_use]
pub fn render_keyboard(used: &UsedLetters) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row.chars().map(|ch| tile(ch, used.get(ch)).to_string()).collect();
            format!("{}{keys}", " ".repeat(i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the attempts so far followed by placeholder rows for the rest
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(
    out: &mut W,
    attempts: &[Attempt],
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out)?;
    for attempt in attempts {
        writeln!(out, "  {}", render_attempt(attempt))?;
    }
    let placeholder = " _ ".repeat(WORD_LENGTH);
    for _ in attempts.len()..max_attempts {
        writeln!(out, "  {}", placeholder.bright_black())?;
    }
    writeln!(out)
}

/// Print the game summary and share text
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_result<W: Write>(
    out: &mut W,
    word: &str,
    won: bool,
    duration: u64,
    share: &str,
) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    if won {
        writeln!(out, "{}", "🎉 Solved!".bright_green().bold())?;
    } else {
        writeln!(
            out,
            "{} The word was {}",
            "❌ Out of guesses.".red().bold(),
            word.to_uppercase().bright_yellow().bold()
        )?;
    }
    let time = parse_duration(duration);
    if !time.is_empty() {
        writeln!(out, "   Time: {time}")?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "\n{share}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn attempt_renders_uppercase_tiles() {
        plain();
        let attempt = score(&Word::new("crane").unwrap(), &Word::new("slate").unwrap());
        assert_eq!(render_attempt(&attempt), " C  R  A  N  E ");
    }

    #[test]
    fn keyboard_has_three_staggered_rows() {
        plain();
        let rendered = render_keyboard(&UsedLetters::new());
        let rows: Vec<_> = rendered.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(" Q "));
        assert!(rows[1].starts_with("  A "));
        assert!(rows[2].starts_with("   Z "));
    }

    #[test]
    fn board_pads_remaining_rows() {
        plain();
        let attempt = score(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
        let mut out = Vec::new();
        print_board(&mut out, &[attempt], 6).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.contains(" _ ")).count(), 5);
        assert!(text.contains(" C  R  A  N  E "));
    }

    #[test]
    fn result_mentions_word_when_lost() {
        plain();
        let mut out = Vec::new();
        print_result(&mut out, "crane", false, 65, "Wordham X/6").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("CRANE"));
        assert!(text.contains("Time: 1m:05s"));
        assert!(text.contains("Wordham X/6"));
    }
}
