//! Simple interactive CLI mode
//!
//! Line-based game: prompt for a letter, show the board, repeat.

use crate::core::Letter;
use crate::game::{GameSession, GameStatus};
use crate::output::formatters::{letter_list, spaced};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the console game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// session hits an engine invariant violation.
pub fn run_simple(session: &mut GameSession) -> io::Result<GameStatus> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(session, &mut stdin.lock(), &mut stdout)
}

/// Play `session` to the end using the given input and output
///
/// Returns the final status, or `InProgress` if input ran out first.
///
/// # Errors
///
/// Returns an I/O error on read/write failure. Engine invariant violations
/// are surfaced as `io::ErrorKind::Other` so the session is abandoned.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameStatus> {
    writeln!(
        output,
        "\n{} I'm thinking of a word with {} letters.\n",
        "Evil Hangman!".bright_red().bold(),
        session.word_length()
    )?;

    while !session.status().is_over() {
        print_progress(session, output)?;

        let Some(letter) = prompt_for_guess(session, input, output)? else {
            writeln!(output, "\nGoodbye!")?;
            return Ok(session.status());
        };

        match session.guess(letter) {
            Ok(outcome) if outcome.hit => {
                writeln!(output, "Yes, there is a '{letter}'.\n")?;
            }
            Ok(_) => writeln!(output, "Sorry, no '{letter}'.\n")?,
            Err(e) if e.is_recoverable() => writeln!(output, "{e}")?,
            Err(e) => return Err(io::Error::other(e)),
        }
    }

    match session.status() {
        GameStatus::Solved => writeln!(
            output,
            "{} You've guessed the word: {}",
            "Congratulations!".green().bold(),
            session.revealed_solution()
        )?,
        GameStatus::Exhausted => {
            writeln!(output, "You've used all 26 letters. Game over!")?;
            if let Some(word) = session.reveal_word() {
                writeln!(output, "The correct word was: {word}")?;
            }
        }
        GameStatus::InProgress => {}
    }

    Ok(session.status())
}

fn print_progress<W: Write>(session: &GameSession, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", spaced(session.revealed_solution()).bold())?;
    writeln!(
        output,
        "Incorrect guesses: {}",
        letter_list(session.history().incorrect())
    )?;
    writeln!(output, "Remaining guesses: {}", session.remaining_letters())
}

/// Prompt until the player enters a single new letter
///
/// Returns `None` at end of input.
fn prompt_for_guess<R: BufRead, W: Write>(
    session: &GameSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Letter>> {
    loop {
        write!(output, "Guess a letter: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<Letter>() {
            Ok(letter) if session.history().contains(letter) => {
                writeln!(output, "You've already guessed that letter!")?;
            }
            Ok(letter) => return Ok(Some(letter)),
            Err(_) => writeln!(output, "Please enter a single valid letter.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session(list: &[&str]) -> GameSession {
        let words: Vec<Word> = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        GameSession::with_length(&words, list[0].len()).unwrap()
    }

    fn run(session: &mut GameSession, input: &str) -> (GameStatus, String) {
        let mut output = Vec::new();
        let status = play(session, &mut input.as_bytes(), &mut output).unwrap();
        (status, String::from_utf8(output).unwrap())
    }

    #[test]
    fn plays_single_word_to_the_end() {
        let mut game = session(&["apple"]);
        let (status, output) = run(&mut game, "a\np\nl\ne\n");

        assert_eq!(status, GameStatus::Solved);
        assert!(output.contains("You've guessed the word: apple"));
        assert!(output.contains("Remaining guesses: 23"));
    }

    #[test]
    fn invalid_input_is_ignored() {
        let mut game = session(&["apple", "ample"]);
        let (_, output) = run(&mut game, "1\nabc\n@\na\n");

        assert_eq!(output.matches("Please enter a single valid letter.").count(), 3);
        assert_eq!(game.history().guess_count(), 1);
        assert_eq!(game.revealed_solution().to_string(), "a____");
    }

    #[test]
    fn repeated_letter_is_reprompted() {
        let mut game = session(&["apple", "ample"]);
        let (_, output) = run(&mut game, "a\nA\nz\n");

        assert!(output.contains("You've already guessed that letter!"));
        let guessed: Vec<char> = game.history().guessed().iter().map(|l| l.as_char()).collect();
        assert_eq!(guessed, ['a', 'z']);
        assert!(output.contains("Sorry, no 'z'."));
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let mut game = session(&["apple", "ample"]);
        let (status, output) = run(&mut game, "e\n");

        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("Goodbye!"));
        assert!(output.contains("Incorrect guesses: []"));
    }
}
