//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{FamilyReport, SimulationResult};
use colored::Colorize;

/// Print how a letter splits the candidates
pub fn print_families(report: &FamilyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' against {} words of length {} ",
        "FAMILIES FOR".bright_cyan().bold(),
        report.letter.to_string().bright_yellow().bold(),
        report.total_candidates,
        report.word_length
    );
    println!("{}", "═".repeat(60).cyan());

    let largest = report.chosen().map_or(0, |f| f.size);
    for (i, family) in report.families.iter().enumerate() {
        let bar = create_progress_bar(family.size as f64, largest as f64, 20);
        let mut sample = family.sample.join(", ");
        if family.size > family.sample.len() {
            sample.push_str(", …");
        }

        if i == 0 {
            println!(
                "\n {} [{}] {:5} {}",
                family.pattern.bright_green().bold(),
                bar.green(),
                family.size,
                "← kept".bright_green()
            );
        } else {
            println!(
                "\n {} [{}] {:5}",
                family.pattern,
                bar.bright_black(),
                family.size
            );
        }
        println!("   {}", sample.bright_black());
    }
    println!("\n{} families in total", report.families.len());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:      {}", result.games);
    println!(
        "   Average guesses:   {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!(
        "   Average misses:    {}",
        format!("{:.2}", result.average_incorrect)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest misses:     {}",
        format!("{}", result.min_incorrect).green()
    );
    println!(
        "   Most misses:       {}",
        format!("{}", result.max_incorrect).red()
    );
    if let Some(worst) = &result.worst_game {
        println!(
            "   Hardest word:      {} (seed {}, {} misses)",
            worst.word.to_uppercase().bright_white().bold(),
            worst.seed,
            worst.incorrect
        );
    }
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:      {:.1}", result.games_per_second);

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    for (&misses, &count) in &result.distribution {
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {misses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
