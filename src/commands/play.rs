//! Interactive console game
//!
//! Text-based game loop: the player types guesses, the board is redrawn after
//! every turn and finished games are recorded in the engine's stats log.

use crate::game::{GameEngine, GameSession, GameState};
use crate::output::formatters::{format_dashboard, format_row};
use anyhow::Result;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive game on stdin/stdout
///
/// Secret words are drawn from a generator seeded with `seed`, or with a
/// random seed when none is given.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(engine: &GameEngine, player: &str, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "interactive game started");

    let mut rng = StdRng::seed_from_u64(seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(engine, player, &mut rng, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the interactive game on arbitrary input and output streams
///
/// Every new game draws its secret from `rng`. Returns when the player quits
/// or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<G: Rng + ?Sized, R: BufRead, W: Write>(
    engine: &GameEngine,
    player: &str,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                    Wordle - Interactive Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Guess the {}-letter word in {} tries.",
        crate::core::WORD_LENGTH,
        engine.config().max_guesses
    )?;
    writeln!(output, "  🟩 letter is in the word and in the correct spot")?;
    writeln!(output, "  🟨 letter is in the word but in the wrong spot")?;
    writeln!(output, "  ⬜ letter is not in the word\n")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'stats' for the dashboard\n")?;

    let mut session = engine.new_session_with(rng);

    loop {
        // Every pass over a finished game is a render; recording is idempotent
        engine.record_if_terminal(&mut session, player);

        match session.state() {
            GameState::Won | GameState::Lost => {
                render_board(output, engine, &session)?;
                render_outcome(output, &session)?;

                let Some(answer) = prompt(input, output, "Play again? (yes/no)")? else {
                    return Ok(());
                };
                if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    session = engine.restart_with(session, rng);
                    writeln!(output, "\n🔄 New game started!\n")?;
                } else {
                    writeln!(output, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
            GameState::Active => {
                let label = format!(
                    "Guess {}/{}",
                    session.guesses().len() + 1,
                    session.config().max_guesses
                );
                let Some(text) = prompt(input, output, &label)? else {
                    return Ok(());
                };

                match text.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        writeln!(output, "\n👋 Thanks for playing!\n")?;
                        return Ok(());
                    }
                    "new" | "n" => {
                        session = engine.restart_with(session, rng);
                        writeln!(output, "\n🔄 New game started!\n")?;
                    }
                    "stats" | "s" => {
                        write!(output, "{}", format_dashboard(&engine.dashboard_data()))?;
                    }
                    _ => match engine.submit_guess(&mut session, &text) {
                        Ok(()) => {
                            if session.state() == GameState::Active {
                                render_board(output, engine, &session)?;
                            }
                        }
                        Err(e) => writeln!(output, "❌ {e}\n")?,
                    },
                }
            }
        }
    }
}

fn render_board<W: Write>(output: &mut W, engine: &GameEngine, session: &GameSession) -> Result<()> {
    writeln!(output)?;
    for row in engine.renderable_rows(session) {
        writeln!(output, "  {}", format_row(&row))?;
    }
    writeln!(output)?;
    Ok(())
}

fn render_outcome<W: Write>(output: &mut W, session: &GameSession) -> Result<()> {
    let view = session.view();
    let secret = view.secret.map_or("?????", |w| w.text());

    if view.state == GameState::Won {
        let turns = view.guesses.len();
        let performance = match turns {
            1 => "🏆 Perfect! Incredible hole-in-one!",
            2 => "⭐ Excellent! Outstanding performance!",
            3 => "💫 Great! Very well played!",
            4 => "✨ Good! Nice work!",
            5 => "👍 Solved! Got it!",
            _ => "😅 Phew! Just in time!",
        };
        writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
        writeln!(output, "  {}", performance.bright_green().bold())?;
        writeln!(
            output,
            "  Solved {} in {} {} ({}s)",
            secret.bright_white().bold(),
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" },
            view.elapsed_seconds
        )?;
        writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    } else {
        writeln!(output, "{}", "═".repeat(60).red())?;
        writeln!(
            output,
            "  {} The answer was {}",
            "Game over!".red().bold(),
            secret.bright_white().bold()
        )?;
        writeln!(output, "{}", "═".repeat(60).red())?;
    }
    Ok(())
}

/// Prompt for one line of input, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, WordSelector};
    use std::io::Cursor;

    fn engine_for(word: &str) -> GameEngine {
        GameEngine::new(
            WordSelector::new(vec![Word::new(word).unwrap()]).unwrap(),
            GameConfig::default(),
        )
    }

    fn play_seeded(engine: &GameEngine, seed: u64, script: &str) -> String {
        colored::control::set_override(false);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_play_with(engine, "tester", &mut rng, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn play(engine: &GameEngine, script: &str) -> String {
        play_seeded(engine, 0, script)
    }

    #[test]
    fn win_then_quit_records_one_game() {
        let engine = engine_for("crane");
        let transcript = play(&engine, "brave\ncrane\nno\n");

        assert!(transcript.contains("Solved CRANE in 2 guesses"));
        let history = engine.dashboard_data().history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].player, "tester");
        assert!(history[0].won);
    }

    #[test]
    fn loss_reveals_answer() {
        let engine = engine_for("epoch");
        let transcript = play(&engine, "brave\nbrave\nbrave\nbrave\nbrave\nbrave\nn\n");

        assert!(transcript.contains("The answer was EPOCH"));
        let summary = engine.dashboard_data().summary.unwrap();
        assert_eq!(summary.total_wins, 0);
        assert_eq!(summary.total_games, 1);
    }

    #[test]
    fn invalid_guess_is_reported_and_not_counted() {
        let engine = engine_for("apple");
        let transcript = play(&engine, "abc\nquit\n");

        assert!(transcript.contains("❌ invalid guess"));
        assert!(transcript.contains("Guess 1/6"));
        assert!(!transcript.contains("Guess 2/6"));
        assert!(engine.dashboard_data().history.is_empty());
    }

    #[test]
    fn play_again_records_each_game() {
        let engine = engine_for("dance");
        play(&engine, "dance\nyes\ndance\nno\n");
        assert_eq!(engine.stats().len(), 2);
    }

    #[test]
    fn stats_command_shows_dashboard() {
        let engine = engine_for("apple");
        let transcript = play(&engine, "stats\n");
        assert!(transcript.contains("No games played yet!"));
    }

    #[test]
    fn same_seed_draws_same_secrets() {
        let misses = "zzzzz\n".repeat(6);
        let script = format!("{misses}yes\n{misses}yes\n{misses}no\n");

        let first = GameEngine::default();
        let second = GameEngine::default();
        let first_transcript = play_seeded(&first, 42, &script);
        let second_transcript = play_seeded(&second, 42, &script);

        let secrets = |engine: &GameEngine| -> Vec<String> {
            engine
                .dashboard_data()
                .history
                .iter()
                .map(|r| r.secret_word.text().to_string())
                .collect()
        };
        assert_eq!(secrets(&first).len(), 3);
        assert_eq!(secrets(&first), secrets(&second));
        assert_eq!(first_transcript, second_transcript);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let engine = engine_for("apple");
        let transcript = play(&engine, "");
        assert!(transcript.contains("Guess 1/6"));
    }
}
