//! Wordham
//!
//! Core of a daily word-guessing game: scores guesses letter by letter, tracks
//! the letters used, persists progress and history across runs, and picks
//! each new target while avoiding words already played.
//!
//! # Quick Start
//!
//! ```rust
//! use wordham::selector::ThreadRandom;
//! use wordham::session::Session;
//! use wordham::store::{MemoryBackend, StateStore};
//! use wordham::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let store = StateStore::new(MemoryBackend::new());
//! let mut session = Session::start(&dictionary, store, ThreadRandom).unwrap();
//!
//! let submission = session.submit("hello").unwrap();
//! assert_eq!(submission.attempt.len(), 5);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Target word selection
pub mod selector;

// Persisted game state
pub mod store;

// Game orchestration and observable state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
