//! Command implementations

pub mod history;
pub mod play;

pub use history::{last_game_share, run_reset_history, run_share, run_status};
pub use play::run_play;
