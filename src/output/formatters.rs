//! Formatting utilities for terminal output

use crate::core::Status;
use crate::game::{DashboardData, GameRecord, GuessRow, StatsSummary};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Paint one letter tile according to its status
#[must_use]
pub fn letter_tile(letter: char, status: Status) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        Status::Correct => tile.black().on_green().bold(),
        Status::Present => tile.black().on_yellow().bold(),
        Status::Absent => tile.white().on_bright_black(),
    }
}

/// Format one guess row as colored tiles followed by its emoji squares
#[must_use]
pub fn format_row(row: &GuessRow) -> String {
    let mut line = format!("{:>2}. ", row.number);
    for &(letter, status) in &row.letters {
        let _ = write!(line, "{}", letter_tile(letter, status));
    }
    line.push(' ');
    line.extend(row.letters.iter().map(|&(_, status)| status.emoji()));
    line
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn format_overview(out: &mut String, summary: &StatsSummary) {
    let _ = writeln!(out, "\n📊 {}", "Overview".bright_cyan().bold());
    let _ = writeln!(out, "  Total games:      {}", summary.total_games);
    let _ = writeln!(out, "  Total wins:       {}", summary.total_wins);
    let _ = writeln!(
        out,
        "  Average guesses:  {}",
        format!("{:.2}", summary.average_guesses).bright_yellow().bold()
    );
    let _ = writeln!(
        out,
        "  Win rate:         [{}] {}",
        create_progress_bar(summary.win_rate_percent, 100.0, 20).green(),
        format!("{:.1}%", summary.win_rate_percent).bright_yellow()
    );

    let _ = writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = summary.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in summary.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        let _ = writeln!(out, "  {}: {} {count:4}", i + 1, bar.green());
    }
}

fn format_history(out: &mut String, history: &[GameRecord]) {
    if history.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n🗂  {}", "Game History".bright_cyan().bold());
    let _ = writeln!(
        out,
        "  {:<16} {:<4} {:>7}  {:<5} {:>8}  {}",
        "Player", "Won", "Guesses", "Word", "Time (s)", "Played At"
    );
    for record in history {
        let _ = writeln!(
            out,
            "  {:<16} {:<4} {:>7}  {:<5} {:>8}  {}",
            record.player,
            if record.won { "yes" } else { "no" },
            record.guess_count,
            record.secret_word.text(),
            record.duration_seconds,
            record.recorded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
}

/// Format the stats dashboard: overview, guess distribution and history
#[must_use]
pub fn format_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "═".repeat(60).cyan());
    let _ = writeln!(out, " {} ", "GAME STATS DASHBOARD".bright_cyan().bold());
    let _ = writeln!(out, "{}", "═".repeat(60).cyan());

    match &data.summary {
        None => {
            let _ = writeln!(out, "\nNo games played yet!");
        }
        Some(summary) => {
            format_overview(&mut out, summary);
            format_history(&mut out, &data.history);
        }
    }

    out
}
