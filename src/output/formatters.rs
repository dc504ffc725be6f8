//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::RevealedSolution;

/// Space out the revealed solution: `a _ _ l e`
#[must_use]
pub fn spaced(solution: &RevealedSolution) -> String {
    let cells: Vec<String> = solution
        .bytes()
        .iter()
        .map(|&b| char::from(b).to_string())
        .collect();
    cells.join(" ")
}

/// Format letters as `[b, q, z]`
#[must_use]
pub fn letter_list<'a>(letters: impl IntoIterator<Item = &'a Letter>) -> String {
    let items: Vec<String> = letters.into_iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    #[test]
    fn spaced_blank_solution() {
        assert_eq!(spaced(&RevealedSolution::new(4)), "_ _ _ _");
    }

    #[test]
    fn spaced_partial_solution() {
        let mut solution = RevealedSolution::new(5);
        solution.apply(
            &Pattern::from_str("_pp__").unwrap(),
            Letter::new('p').unwrap(),
        );
        assert_eq!(spaced(&solution), "_ p p _ _");
    }

    #[test]
    fn letter_list_formats() {
        let letters = [Letter::new('b').unwrap(), Letter::new('z').unwrap()];
        assert_eq!(letter_list(&letters), "[b, z]");
        assert_eq!(letter_list(&[] as &[Letter]), "[]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
