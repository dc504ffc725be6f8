//! Core domain types for Evil Hangman
//!
//! This module contains the validated value types shared by the pattern engine
//! and the game session. Everything here is pure and cheap to test.

mod letter;
mod pattern;
mod word;

pub use letter::{ALPHABET_SIZE, Letter, LetterError};
pub use pattern::{BLANK, Pattern};
pub use word::{Word, WordError};
