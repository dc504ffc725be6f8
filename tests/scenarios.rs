//! End-to-end game scenarios through the public API.

use evil_hangman::core::{Letter, Pattern, Word};
use evil_hangman::engine::{partition, select_dominant_family};
use evil_hangman::game::{GameError, GameSession, GameStatus};
use evil_hangman::wordlists::{DICTIONARY, loader::words_from_slice};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::new(*w).unwrap()).collect()
}

fn letter(c: char) -> Letter {
    Letter::new(c).unwrap()
}

fn texts(session: &GameSession) -> Vec<&str> {
    session.candidates().iter().map(Word::text).collect()
}

#[test]
fn three_singleton_families_pick_the_blank_pattern() {
    let candidates = words(&["apple", "ample", "actor"]);

    assert_eq!(Pattern::of(&candidates[0], letter('p')).to_string(), "_pp__");
    assert_eq!(Pattern::of(&candidates[1], letter('p')).to_string(), "__p__");
    assert_eq!(Pattern::of(&candidates[2], letter('p')).to_string(), "_____");

    let families = partition(&candidates, letter('p')).unwrap();
    assert_eq!(families.len(), 3);
    assert!(families.iter().all(|(_, family)| family.len() == 1));
    assert_eq!(
        select_dominant_family(&families).unwrap().to_string(),
        "_____"
    );

    let mut session = GameSession::with_length(&candidates, 5).unwrap();
    let outcome = session.process_guess('p').unwrap();
    assert!(!outcome.hit);
    assert_eq!(texts(&session), ["actor"]);
}

#[test]
fn shared_first_letter_keeps_both_words() {
    let mut session = GameSession::with_length(&words(&["apple", "ample"]), 5).unwrap();
    let outcome = session.process_guess('a').unwrap();

    assert_eq!(texts(&session), ["ample", "apple"]);
    assert_eq!(session.revealed_solution().to_string(), "a____");
    assert!(!session.history().incorrect().contains(&letter('a')));
    assert_eq!(outcome.status, GameStatus::InProgress);
}

#[test]
fn single_word_reveals_step_by_step() {
    let mut session = GameSession::with_length(&words(&["apple"]), 5).unwrap();

    for (c, expected) in [('a', "a____"), ('p', "app__"), ('l', "appl_")] {
        session.process_guess(c).unwrap();
        assert_eq!(session.revealed_solution().to_string(), expected);
        assert!(!session.is_solved());
    }

    session.process_guess('e').unwrap();
    assert_eq!(session.revealed_solution().to_string(), "apple");
    assert!(session.is_solved());
    assert_eq!(session.status(), GameStatus::Solved);
}

#[test]
fn absent_letter_changes_only_the_incorrect_set() {
    let mut session = GameSession::with_length(&words(&["apple", "ample"]), 5).unwrap();
    session.process_guess('z').unwrap();

    assert_eq!(texts(&session), ["ample", "apple"]);
    assert_eq!(session.revealed_solution().to_string(), "_____");
    let incorrect: Vec<char> = session
        .history()
        .incorrect()
        .iter()
        .map(|l| l.as_char())
        .collect();
    assert_eq!(incorrect, ['z']);
}

#[test]
fn duplicate_guess_is_rejected_without_change() {
    let mut session = GameSession::with_length(&words(&["apple", "ample", "actor"]), 5).unwrap();
    session.process_guess('e').unwrap();
    let candidates = texts(&session).join(",");
    let revealed = session.revealed_solution().to_string();
    let history = session.history().clone();

    assert_eq!(
        session.process_guess('e').unwrap_err(),
        GameError::DuplicateGuess(letter('e'))
    );
    assert_eq!(texts(&session).join(","), candidates);
    assert_eq!(session.revealed_solution().to_string(), revealed);
    assert_eq!(session.history(), &history);
}

#[test]
fn candidate_length_matches_solution_throughout() {
    let dictionary = words_from_slice(DICTIONARY);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = GameSession::new(&dictionary, None, &mut rng).unwrap();

    for c in "etaoinshrdlucmfwypvbgkjqxz".chars() {
        if session.status().is_over() {
            break;
        }
        session.process_guess(c).unwrap();
        let len = session.revealed_solution().len();
        assert!(session.candidates().iter().all(|w| w.len() == len));
    }
    assert!(session.is_solved());
}

#[test]
fn empty_dictionary_cannot_start() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        GameSession::new(&[], Some(5), &mut rng).unwrap_err(),
        GameError::EmptyDictionary
    );
}
