//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameError, GameSession, GameStatus, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a [Word],
    pub word_length: Option<usize>,
    pub rng: StdRng,
    pub session: GameSession,
    pub starting_candidates: usize,
    pub last_guess: Option<GuessOutcome>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub total_guesses: usize,
    pub total_misses: usize,
}

impl<'a> App<'a> {
    /// Create the app and start its first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` if no game can be started.
    pub fn new(
        dictionary: &'a [Word],
        word_length: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        let session = GameSession::new(dictionary, word_length, &mut rng)?;
        let starting_candidates = session.candidate_count();

        let mut app = Self {
            dictionary,
            word_length,
            rng,
            session,
            starting_candidates,
            last_guess: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.announce_word();
        Ok(app)
    }

    fn announce_word(&mut self) {
        let text = format!(
            "I'm thinking of a {}-letter word. Type a letter to guess.",
            self.session.word_length()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn handle_guess(&mut self, input: char) {
        match self.session.process_guess(input) {
            Ok(outcome) => {
                let text = if outcome.hit {
                    format!(
                        "Yes, there is a '{}'! ({} words still fit)",
                        outcome.letter, outcome.family_size
                    )
                } else {
                    format!("Sorry, no '{}'.", outcome.letter)
                };
                let style = if outcome.hit {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(&text, style);

                if outcome.status.is_over() {
                    self.finish_game(&outcome);
                }
                self.last_guess = Some(outcome);
            }
            Err(e) if e.is_recoverable() => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            Err(e) => {
                self.add_message(&format!("Game aborted: {e}"), MessageStyle::Error);
                self.input_mode = InputMode::GameOver;
            }
        }
    }

    fn finish_game(&mut self, outcome: &GuessOutcome) {
        self.stats.total_games += 1;
        self.stats.total_guesses += outcome.guessed.len();
        self.stats.total_misses += outcome.incorrect.len();
        self.input_mode = InputMode::GameOver;

        match outcome.status {
            GameStatus::Solved => {
                let text = format!(
                    "🎉 You got it: {} with {} misses!",
                    outcome.revealed.to_uppercase(),
                    outcome.incorrect.len()
                );
                self.add_message(&text, MessageStyle::Success);
            }
            GameStatus::Exhausted => {
                let word = self
                    .session
                    .reveal_word()
                    .map_or_else(String::new, |w| w.text().to_uppercase());
                self.add_message(
                    &format!("You've used all 26 letters. The word was {word}."),
                    MessageStyle::Error,
                );
            }
            GameStatus::InProgress => {}
        }
        self.add_message("Press Enter for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match GameSession::new(self.dictionary, self.word_length, &mut self.rng) {
            Ok(session) => {
                self.starting_candidates = session.candidate_count();
                self.session = session;
                self.last_guess = None;
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.announce_word();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::Guessing => {
                        if let KeyCode::Char(c) = key.code {
                            app.handle_guess(c);
                        }
                    }
                    InputMode::GameOver => {
                        if matches!(key.code, KeyCode::Enter | KeyCode::Char('n')) {
                            app.new_game();
                        }
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
