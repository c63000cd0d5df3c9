//! Wordle Game - CLI
//!
//! Console Wordle with an in-process stats dashboard and a parallel
//! simulation mode for exercising the engine.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{PlayerStrategy, SimulateConfig, run_play, run_simulation, score_words},
    game::{GUEST_PLAYER, GameConfig, GameEngine, MAX_GUESSES, WordSelector},
    output::{print_dashboard, print_score_result, print_simulation_result},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Play Wordle in the terminal and track game statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of guesses allowed per game
    #[arg(short = 'g', long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible word draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Name shown in the stats dashboard
        #[arg(short, long, default_value = GUEST_PLAYER)]
        player: String,
    },

    /// Show the feedback a guess gets against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        answer: String,
    },

    /// Play automated games in parallel and show the dashboard
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Number of simulated players sharing the stats log
        #[arg(short, long, default_value = "8")]
        players: usize,

        /// Player strategy: filtered (default) or random
        #[arg(short, long, default_value = "filtered")]
        strategy: String,

        /// Print the full game history after the summary
        #[arg(long)]
        history: bool,
    },
}

/// Install the tracing subscriber; `RUST_LOG` overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Build the word selector based on the -w flag
fn load_selector(wordlist_mode: &str) -> Result<WordSelector> {
    match wordlist_mode {
        "embedded" => Ok(WordSelector::embedded()),
        path => {
            let words = load_from_file(path)?;
            tracing::info!(path, count = words.len(), "loaded custom word list");
            Ok(WordSelector::new(words)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        player: GUEST_PLAYER.to_string(),
    });

    match command {
        Commands::Score { guess, answer } => run_score_command(&guess, &answer),
        Commands::Play { player } => {
            let engine = build_engine(&cli.wordlist, cli.max_guesses)?;
            run_play(&engine, &player, cli.seed)
        }
        Commands::Simulate {
            count,
            players,
            strategy,
            history,
        } => {
            let engine = build_engine(&cli.wordlist, cli.max_guesses)?;
            let config = SimulateConfig {
                games: count,
                players,
                strategy: PlayerStrategy::from_name(&strategy),
                seed: cli.seed,
                show_progress: true,
            };
            run_simulate_command(&engine, &config, history);
            Ok(())
        }
    }
}

fn build_engine(wordlist: &str, max_guesses: usize) -> Result<GameEngine> {
    let selector = load_selector(wordlist)?;
    Ok(GameEngine::new(selector, GameConfig { max_guesses }))
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let result = score_words(guess, answer)?;
    print_score_result(&result);
    Ok(())
}

fn run_simulate_command(engine: &GameEngine, config: &SimulateConfig, show_history: bool) {
    println!(
        "Simulating {} games across {} players ({:?} strategy)...",
        config.games, config.players, config.strategy
    );

    let result = run_simulation(engine, config);
    print_simulation_result(&result);

    let mut dashboard = engine.dashboard_data();
    if !show_history {
        dashboard.history.clear();
    }
    print_dashboard(&dashboard);
}
