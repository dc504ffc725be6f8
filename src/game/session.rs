//! The evil hangman session
//!
//! A session never commits to a secret word. It keeps every dictionary word
//! that is still consistent with the guesses so far, and on each guess keeps
//! the largest family the pattern engine produces.

use super::{GameError, GuessHistory, RevealedSolution};
use crate::core::{Letter, Pattern, Word};
use crate::engine::{EngineError, Families, partition, select_dominant_family};
use log::{debug, info};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Still accepting guesses
    InProgress,
    /// Every position revealed
    Solved,
    /// All 26 letters guessed without solving
    Exhausted,
}

impl GameStatus {
    /// True for `Solved` and `Exhausted`
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Snapshot handed back after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: Letter,
    /// Whether the kept family reveals the letter
    pub hit: bool,
    /// Pattern of the kept family
    pub pattern: Pattern,
    pub revealed: String,
    pub guessed: Vec<Letter>,
    pub incorrect: Vec<Letter>,
    pub status: GameStatus,
    /// Candidates left after the guess
    pub family_size: usize,
    /// How many families the guess split the candidates into
    pub family_count: usize,
}

/// A single game of evil hangman
#[derive(Debug, Clone)]
pub struct GameSession {
    candidates: Vec<Word>,
    solution: RevealedSolution,
    history: GuessHistory,
    word_length: usize,
}

impl GameSession {
    /// Start a game from `dictionary`
    ///
    /// With `Some(len)` the game uses every dictionary word of that length.
    /// With `None` the length is taken from a dictionary word picked by `rng`.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no word qualifies.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::game::GameSession;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let words: Vec<Word> = ["apple", "ample", "ox"].iter().map(|w| Word::new(*w).unwrap()).collect();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::new(&words, Some(5), &mut rng).unwrap();
    /// assert_eq!(session.candidate_count(), 2);
    /// assert_eq!(session.revealed_solution().to_string(), "_____");
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dictionary: &[Word],
        word_length: Option<usize>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let length = match word_length {
            Some(len) => len,
            None => dictionary
                .choose(rng)
                .map(Word::len)
                .ok_or(GameError::EmptyDictionary)?,
        };
        Self::with_length(dictionary, length)
    }

    /// Start a game using every dictionary word of `length` letters
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if no word has that length.
    pub fn with_length(dictionary: &[Word], length: usize) -> Result<Self, GameError> {
        let mut candidates: Vec<Word> = dictionary
            .iter()
            .filter(|word| word.len() == length)
            .cloned()
            .collect();
        candidates.sort();
        candidates.dedup();

        if candidates.is_empty() {
            return Err(GameError::EmptyDictionary);
        }

        info!(
            "new game: {} candidate words of length {length}",
            candidates.len()
        );

        Ok(Self {
            candidates,
            solution: RevealedSolution::new(length),
            history: GuessHistory::new(),
            word_length: length,
        })
    }

    /// Play one guess from raw driver input
    ///
    /// # Errors
    /// - `GameError::GameOver` once the session is solved or exhausted
    /// - `GameError::InvalidLetter` unless `input` is an ASCII letter
    /// - `GameError::DuplicateGuess` if the letter was already played
    /// - `GameError::Engine` if the candidate set was somehow empty
    ///
    /// Rejected guesses leave the session untouched.
    pub fn process_guess(&mut self, input: char) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        let letter = Letter::new(input)?;
        self.apply_guess(letter)
    }

    /// Play one guess from a line of input holding exactly one letter
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Same as [`process_guess`](Self::process_guess).
    pub fn guess_str(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        let letter: Letter = input.trim().parse()?;
        self.apply_guess(letter)
    }

    /// Play one already-validated letter
    ///
    /// # Errors
    /// Same as [`process_guess`](Self::process_guess), minus letter validation.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessOutcome, GameError> {
        self.ensure_in_progress()?;
        self.apply_guess(letter)
    }

    /// Partition the current candidates for `letter` without playing it
    ///
    /// # Errors
    /// Returns `GameError::Engine` if the candidate set is empty.
    pub fn preview(&self, letter: Letter) -> Result<Families, GameError> {
        Ok(partition(&self.candidates, letter)?)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.status().is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GameError> {
        if self.history.contains(letter) {
            return Err(GameError::DuplicateGuess(letter));
        }

        // Nothing is mutated until the engine has produced the kept family
        let families = partition(&self.candidates, letter)?;
        let family_count = families.len();
        let pattern = select_dominant_family(&families)?;
        let family = families
            .into_family(&pattern)
            .ok_or(EngineError::NoFamilies)?;

        let hit = pattern.contains(letter);
        let before = self.candidates.len();
        self.candidates = family;
        self.solution.apply(&pattern, letter);
        self.history.record(letter, hit);

        debug!(
            "guess '{letter}': {family_count} families, kept {pattern} ({before} -> {} words)",
            self.candidates.len()
        );

        let status = self.status();
        match status {
            GameStatus::Solved => info!(
                "solved as {} after {} guesses",
                self.solution,
                self.history.guess_count()
            ),
            GameStatus::Exhausted => info!("alphabet exhausted at {}", self.solution),
            GameStatus::InProgress => {}
        }

        Ok(GuessOutcome {
            letter,
            hit,
            pattern,
            revealed: self.solution.to_string(),
            guessed: self.history.guessed().to_vec(),
            incorrect: self.history.incorrect().iter().copied().collect(),
            status,
            family_size: self.candidates.len(),
            family_count,
        })
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.solution.is_solved() {
            GameStatus::Solved
        } else if self.history.remaining() == 0 {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        }
    }

    /// True once every position is revealed
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solution.is_solved()
    }

    /// True once all 26 letters are guessed without solving
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.status(), GameStatus::Exhausted)
    }

    /// The player's view of the word
    #[must_use]
    pub const fn revealed_solution(&self) -> &RevealedSolution {
        &self.solution
    }

    /// Guessed and incorrect letters
    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Words still consistent with every guess, sorted
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Number of words still in play
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Length of every word in play
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letters the player has not tried yet
    #[must_use]
    pub fn remaining_letters(&self) -> usize {
        self.history.remaining()
    }

    /// A word to show the player at the end of the game
    #[must_use]
    pub fn reveal_word(&self) -> Option<&Word> {
        self.candidates.first()
    }
}
