//! Evil Hangman
//!
//! A hangman game that never commits to a secret word. After every guess it
//! splits the words still in play into families by the pattern they would
//! show, and keeps the largest one.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::game::GameSession;
//! use evil_hangman::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let words = words_from_slice(DICTIONARY);
//! let mut session = GameSession::with_length(&words, 5).unwrap();
//!
//! let outcome = session.process_guess('e').unwrap();
//! println!("{} ({} words still fit)", outcome.revealed, outcome.family_size);
//! ```

// Core domain types
pub mod core;

// Pattern partitioning and family selection
pub mod engine;

// Game session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
