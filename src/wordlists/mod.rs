//! Word lists for Evil Hangman
//!
//! Provides the embedded dictionary compiled into the binary and loaders for
//! custom word files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
