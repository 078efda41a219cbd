//! Terminal output formatting
//!
//! Shareable text and duration strings, plus colored rendering for the CLI.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result, render_attempt, render_keyboard};
pub use formatters::{emoji_from_attempts, parse_duration, share_text};
