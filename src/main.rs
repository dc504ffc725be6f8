//! Evil Hangman - CLI
//!
//! Hangman where the computer cheats: it keeps every word that fits your
//! guesses and dodges each letter as long as it can.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{analyze_letter, run_simple, run_simulation},
    core::{Letter, Word},
    game::GameSession,
    output::{print_families, print_simulation_result},
    wordlists::{DICTIONARY, loader::words_from_slice},
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an opponent that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to play (default: length of a randomly chosen word)
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Seed for choosing the word length
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based console game
    Simple,

    /// Show how a letter splits the starting words into families
    Families {
        /// The letter to analyze
        letter: char,
    },

    /// Play many games with an automated guesser
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use evil_hangman::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Couldn't read the word list from {path}"))?;
            info!("loaded {} words from {path}", words.len());
            Ok(words)
        }
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.length, cli.seed),
        Commands::Simple => run_simple_command(&dictionary, cli.length, cli.seed),
        Commands::Families { letter } => {
            run_families_command(&dictionary, letter, cli.length, cli.seed)
        }
        Commands::Simulate { count } => {
            run_simulate_command(&dictionary, count, cli.length, cli.seed)
        }
    }
}

fn run_play_command(dictionary: &[Word], length: Option<usize>, seed: Option<u64>) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(dictionary, length, seed)?;
    run_tui(app)
}

fn run_simple_command(
    dictionary: &[Word],
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = GameSession::new(dictionary, length, &mut rng_for(seed))?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_families_command(
    dictionary: &[Word],
    letter: char,
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let letter = Letter::new(letter)?;
    let session = GameSession::new(dictionary, length, &mut rng_for(seed))?;
    let report = analyze_letter(&session, letter)?;
    print_families(&report);
    Ok(())
}

fn run_simulate_command(
    dictionary: &[Word],
    count: usize,
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.unwrap_or(0);
    match length {
        Some(len) => println!("Simulating {count} games of length {len} (seed {seed})..."),
        None => println!("Simulating {count} games (seed {seed})..."),
    }

    let result = run_simulation(dictionary, count, length, seed, true)?;
    print_simulation_result(&result);
    Ok(())
}
