//! Simulation command
//!
//! Plays many seeded games against an automated guesser to show how hard the
//! evil heuristic makes the game.

use crate::core::{BLANK, Letter, Word};
use crate::game::{GameError, GameSession};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub seed: u64,
    pub word: String,
    pub guesses: usize,
    pub incorrect: usize,
}

/// Aggregate statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub average_guesses: f64,
    pub average_incorrect: f64,
    pub min_incorrect: usize,
    pub max_incorrect: usize,
    pub worst_game: Option<GameRecord>,
    /// Incorrect-guess count -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Pick the unguessed letter found in the most consistent dictionary words
///
/// The guesser only sees what a player sees: the revealed solution and the
/// guess history. A dictionary word is consistent when it matches every
/// revealed position and holds no guessed letter in a blank position. Ties go
/// to the earlier letter; with no consistent words the first unguessed
/// letter is used.
#[must_use]
pub fn pick_letter(dictionary: &[Word], session: &GameSession) -> Option<Letter> {
    let revealed = session.revealed_solution().bytes();
    let history = session.history();
    let guessed: Vec<u8> = history.guessed().iter().map(|l| l.byte()).collect();

    let mut counts: FxHashMap<Letter, usize> = FxHashMap::default();
    for word in dictionary.iter().filter(|w| w.len() == revealed.len()) {
        let consistent = word.bytes().iter().zip(revealed).all(|(&b, &shown)| {
            if shown == BLANK {
                !guessed.contains(&b)
            } else {
                b == shown
            }
        });
        if !consistent {
            continue;
        }
        for letter in history.unguessed() {
            if word.has_letter(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    history
        .unguessed()
        .max_by(|a, b| {
            let ca = counts.get(a).copied().unwrap_or(0);
            let cb = counts.get(b).copied().unwrap_or(0);
            // Reverse letter order so the earlier letter wins ties
            ca.cmp(&cb).then_with(|| b.cmp(a))
        })
}

fn play_one(
    dictionary: &[Word],
    word_length: Option<usize>,
    seed: u64,
) -> Result<GameRecord, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = GameSession::new(dictionary, word_length, &mut rng)?;

    while !session.status().is_over() {
        let letter = pick_letter(dictionary, &session).ok_or(GameError::GameOver)?;
        session.guess(letter)?;
    }

    Ok(GameRecord {
        seed,
        word: session.revealed_solution().to_string(),
        guesses: session.history().guess_count(),
        incorrect: session.history().incorrect_count(),
    })
}

/// Play `games` seeded games in parallel
///
/// Game `i` uses seed `seed + i`, so a run is reproducible. With
/// `word_length` unset each game draws its own length.
///
/// # Errors
///
/// Returns `GameError::EmptyDictionary` if no game can be started.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(
    dictionary: &[Word],
    games: usize,
    word_length: Option<usize>,
    seed: u64,
    show_progress: bool,
) -> Result<SimulationResult, GameError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..games as u64)
        .into_par_iter()
        .map(|i| {
            let record = play_one(dictionary, word_length, seed.wrapping_add(i));
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(summarize(records, duration))
}

fn summarize(records: Vec<GameRecord>, duration: Duration) -> SimulationResult {
    let games = records.len();
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for record in &records {
        *distribution.entry(record.incorrect).or_insert(0) += 1;
    }

    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();
    let total_incorrect: usize = records.iter().map(|r| r.incorrect).sum();
    let divisor = games.max(1) as f64;

    SimulationResult {
        games,
        average_guesses: total_guesses as f64 / divisor,
        average_incorrect: total_incorrect as f64 / divisor,
        min_incorrect: records.iter().map(|r| r.incorrect).min().unwrap_or(0),
        max_incorrect: records.iter().map(|r| r.incorrect).max().unwrap_or(0),
        worst_game: records
            .into_iter()
            .max_by_key(|r| (r.incorrect, std::cmp::Reverse(r.seed))),
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
