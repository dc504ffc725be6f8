//! Family partitioning
//!
//! Given the current candidates and a guessed letter, groups every candidate
//! by the pattern it would show.

use super::{EngineError, dominance_order};
use crate::core::{Letter, Pattern, Word};
use rustc_hash::FxHashMap;

/// A complete partition of a candidate set
///
/// Every input word lives in exactly one family and no family is empty.
#[derive(Debug, Clone, Default)]
pub struct Families {
    groups: FxHashMap<Pattern, Vec<Word>>,
}

impl Families {
    /// Number of distinct families
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when there are no families at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Words sharing `pattern`, if that family exists
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&[Word]> {
        self.groups.get(pattern).map(Vec::as_slice)
    }

    /// Iterate over families in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &[Word])> {
        self.groups
            .iter()
            .map(|(pattern, words)| (pattern, words.as_slice()))
    }

    /// Total words across all families
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Families ordered by dominance, the chosen one first
    #[must_use]
    pub fn ranked(&self) -> Vec<(&Pattern, &[Word])> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|(pa, wa), (pb, wb)| dominance_order((*pa, wa.len()), (*pb, wb.len())));
        ranked
    }

    /// Move one family out, dropping the rest
    #[must_use]
    pub fn into_family(mut self, pattern: &Pattern) -> Option<Vec<Word>> {
        self.groups.remove(pattern)
    }

    #[cfg(test)]
    pub(crate) fn from_groups(groups: impl IntoIterator<Item = (Pattern, Vec<Word>)>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }
}

/// Partition `candidates` by the pattern each shows for `letter`
///
/// Words keep their relative order inside each family, so a sorted candidate
/// set yields sorted families.
///
/// # Errors
/// Returns `EngineError::EmptyInput` if `candidates` is empty.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Letter, Pattern, Word};
/// use evil_hangman::engine::partition;
///
/// let words: Vec<Word> = ["apple", "ample"].iter().map(|w| Word::new(*w).unwrap()).collect();
/// let families = partition(&words, Letter::new('a').unwrap()).unwrap();
///
/// assert_eq!(families.len(), 1);
/// let family = families.get(&Pattern::from_str("a____").unwrap()).unwrap();
/// assert_eq!(family.len(), 2);
/// ```
pub fn partition(candidates: &[Word], letter: Letter) -> Result<Families, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();
    for word in candidates {
        groups
            .entry(Pattern::of(word, letter))
            .or_default()
            .push(word.clone());
    }

    Ok(Families { groups })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::from_str(s).unwrap()
    }

    #[test]
    fn partition_groups_by_pattern() {
        let candidates = words(&["apple", "ample", "actor"]);
        let families = partition(&candidates, letter('p')).unwrap();

        assert_eq!(families.len(), 3);
        assert_eq!(families.get(&pattern("_pp__")), Some(&candidates[0..1]));
        assert_eq!(families.get(&pattern("__p__")), Some(&candidates[1..2]));
        assert_eq!(families.get(&pattern("_____")), Some(&candidates[2..3]));
    }

    #[test]
    fn partition_shared_pattern_single_family() {
        let candidates = words(&["apple", "angle", "amble", "ample"]);
        let families = partition(&candidates, letter('a')).unwrap();

        assert_eq!(families.len(), 1);
        assert_eq!(families.get(&pattern("a____")).unwrap().len(), 4);
    }

    #[test]
    fn partition_covers_every_word_once() {
        let candidates = words(&["bake", "cake", "lake", "kale", "leak", "tall"]);
        let families = partition(&candidates, letter('k')).unwrap();

        assert_eq!(families.total_words(), candidates.len());
        let mut seen: Vec<&Word> = families.iter().flat_map(|(_, ws)| ws).collect();
        seen.sort();
        let mut expected: Vec<&Word> = candidates.iter().collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn partition_preserves_input_order() {
        let candidates = words(&["bark", "dark", "lark", "park"]);
        let families = partition(&candidates, letter('z')).unwrap();
        assert_eq!(families.get(&pattern("____")), Some(candidates.as_slice()));
    }

    #[test]
    fn partition_empty_input_fails() {
        assert_eq!(
            partition(&[], letter('a')).unwrap_err(),
            EngineError::EmptyInput
        );
    }

    #[test]
    fn ranked_puts_dominant_first() {
        let candidates = words(&["cake", "lake", "kale", "leak", "tall", "ball"]);
        let families = partition(&candidates, letter('k')).unwrap();
        let ranked: Vec<(String, usize)> = families
            .ranked()
            .into_iter()
            .map(|(p, ws)| (p.to_string(), ws.len()))
            .collect();

        assert_eq!(
            ranked,
            vec![
                ("____".to_string(), 2),
                ("__k_".to_string(), 2),
                ("___k".to_string(), 1),
                ("k___".to_string(), 1),
            ]
        );
    }

    #[test]
    fn into_family_moves_words_out() {
        let candidates = words(&["apple", "ample"]);
        let families = partition(&candidates, letter('a')).unwrap();
        let family = families.into_family(&pattern("a____")).unwrap();
        assert_eq!(family, candidates);
    }
}
