//! Display functions for command results

use super::formatters::{format_dashboard, format_row};
use crate::commands::{ScoreResult, SimulationResult};
use crate::game::{DashboardData, GuessRow};
use colored::Colorize;

/// Print the feedback for a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring {} against {}",
        result.guess.text().bright_white().bold(),
        result.answer.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_rows(&[GuessRow::new(1, &result.guess, result.feedback)]);

    println!(
        "\n  Correct: {}  Present: {}  Code: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow(),
        result.feedback
    );
}

/// Print a board of guess rows
pub fn print_rows(rows: &[GuessRow]) {
    for row in rows {
        println!("  {}", format_row(row));
    }
}

/// Print the stats dashboard
pub fn print_dashboard(data: &DashboardData) {
    print!("{}", format_dashboard(data));
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Games played:     {}", result.games);
    println!("   Players:          {}", result.players);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);
}
