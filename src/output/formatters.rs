//! Shareable result and duration formatting

use crate::core::{Attempt, Classification};

const BLACK: char = '\u{2b1b}';
const YELLOW: char = '\u{1f7e8}';
const GREEN: char = '\u{1f7e9}';
/// Shown for a letter that was never scored
const WHITE: char = '\u{2b1c}';

/// Glyph for a single letter state
#[must_use]
pub const fn classification_to_emoji(state: Option<Classification>) -> char {
    match state {
        Some(Classification::Absent) => BLACK,
        Some(Classification::Present) => YELLOW,
        Some(Classification::Correct) => GREEN,
        None => WHITE,
    }
}

/// Render attempts as an emoji grid, one row per attempt
///
/// # Examples
/// ```
/// use wordham::core::{Attempt, Classification, Letter};
/// use wordham::output::formatters::emoji_from_attempts;
///
/// let attempt = Attempt::new(vec![
///     Letter::new('a', Classification::Correct),
///     Letter::new('b', Classification::Absent),
///     Letter::new('c', Classification::Present),
/// ]);
/// assert_eq!(emoji_from_attempts(&[attempt]), "🟩⬛🟨");
/// ```
#[must_use]
pub fn emoji_from_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|attempt| {
            attempt
                .letters()
                .iter()
                .map(|letter| classification_to_emoji(letter.state()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a number of seconds as e.g. `1h:01m:01s`, `1m:05s` or `05s`
///
/// Hours appear only when non-zero. Minutes appear when they or the hours are
/// non-zero, padded to two digits only alongside hours. Seconds appear when
/// they or the minutes are non-zero and are always two digits. Zero renders
/// as an empty string.
#[must_use]
pub fn parse_duration(duration: u64) -> String {
    let hours = duration / 3600;
    let minutes = (duration % 3600) / 60;
    let seconds = duration % 60;

    let mut segments = Vec::with_capacity(3);
    if hours > 0 {
        segments.push(format!("{hours}h"));
    }
    if minutes > 0 || hours > 0 {
        if hours > 0 {
            segments.push(format!("{minutes:02}m"));
        } else {
            segments.push(format!("{minutes}m"));
        }
    }
    if seconds > 0 || minutes > 0 {
        segments.push(format!("{seconds:02}s"));
    }

    segments.join(":")
}

/// Full text to share once a game is over
///
/// ```text
/// Wordham 3/6 in 1m:05s
///
/// ⬛🟨⬛⬛⬛
/// 🟨🟩⬛🟩⬛
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_text(
    attempts: &[Attempt],
    solved: bool,
    max_attempts: usize,
    duration: u64,
) -> String {
    let score = if solved {
        attempts.len().to_string()
    } else {
        "X".to_string()
    };

    let mut header = format!("Wordham {score}/{max_attempts}");
    let time = parse_duration(duration);
    if !time.is_empty() {
        header.push_str(" in ");
        header.push_str(&time);
    }

    format!("{header}\n\n{}", emoji_from_attempts(attempts))
}
