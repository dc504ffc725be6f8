//! Family report command
//!
//! Shows how one letter would split the current candidates and which family
//! the game would keep.

use crate::core::Letter;
use crate::game::{GameError, GameSession};

/// Words shown per family in a report
const SAMPLE_SIZE: usize = 5;

/// One family in a report
#[derive(Debug, Clone)]
pub struct FamilySummary {
    pub pattern: String,
    pub size: usize,
    pub sample: Vec<String>,
}

/// How a letter splits the candidates
#[derive(Debug, Clone)]
pub struct FamilyReport {
    pub letter: Letter,
    pub word_length: usize,
    pub total_candidates: usize,
    /// Ranked by dominance; the first entry is the family the game keeps
    pub families: Vec<FamilySummary>,
}

impl FamilyReport {
    /// The family the game would keep
    #[must_use]
    pub fn chosen(&self) -> Option<&FamilySummary> {
        self.families.first()
    }
}

/// Partition the session's candidates for `letter` without playing it
///
/// # Errors
///
/// Returns `GameError::Engine` if the session has no candidates.
pub fn analyze_letter(session: &GameSession, letter: Letter) -> Result<FamilyReport, GameError> {
    let families = session.preview(letter)?;

    let summaries = families
        .ranked()
        .into_iter()
        .map(|(pattern, words)| FamilySummary {
            pattern: pattern.to_string(),
            size: words.len(),
            sample: words
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();

    Ok(FamilyReport {
        letter,
        word_length: session.word_length(),
        total_candidates: session.candidate_count(),
        families: summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session(list: &[&str]) -> GameSession {
        let words: Vec<Word> = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        GameSession::with_length(&words, list[0].len()).unwrap()
    }

    #[test]
    fn report_ranks_families() {
        let game = session(&["apple", "ample", "actor"]);
        let report = analyze_letter(&game, Letter::new('p').unwrap()).unwrap();

        assert_eq!(report.total_candidates, 3);
        let patterns: Vec<&str> = report.families.iter().map(|f| f.pattern.as_str()).collect();
        assert_eq!(patterns, ["_____", "__p__", "_pp__"]);
        assert_eq!(report.chosen().unwrap().sample, ["actor"]);
    }

    #[test]
    fn report_sizes_sum_to_candidates() {
        let game = session(&["bake", "cake", "lake", "kale", "tall", "ball", "hall"]);
        let report = analyze_letter(&game, Letter::new('a').unwrap()).unwrap();

        let total: usize = report.families.iter().map(|f| f.size).sum();
        assert_eq!(total, report.total_candidates);
        assert!(report.families.iter().all(|f| f.sample.len() <= SAMPLE_SIZE));
    }

    #[test]
    fn report_leaves_session_alone() {
        let game = session(&["apple", "ample"]);
        analyze_letter(&game, Letter::new('a').unwrap()).unwrap();
        assert_eq!(game.history().guess_count(), 0);
    }
}
