//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line modes, plus script replay and self-play
//! simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::time::Duration;
use wordle_game::{
    commands::{SimulateConfig, run_replay, run_simple, run_simulation},
    driver::{Driver, DriverConfig},
    output::{print_replay_result, print_simulation_result},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for solution draws (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// How long a rejected row shakes, in milliseconds
    #[arg(long, global = true, default_value = "500")]
    shake_ms: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode: one guess per line
    Simple,

    /// Replay a script of actions and print the final state
    Replay {
        /// Script file, one action per line
        path: String,

        /// Force the solution instead of drawing one
        #[arg(long)]
        solution: Option<String>,
    },

    /// Play many games with a random consistent player
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

/// Build the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str, seed: Option<u64>) -> Result<WordList> {
    if wordlist == "embedded" {
        return WordList::embedded(seed).context("Failed to load embedded word list");
    }

    let words =
        load_from_file(wordlist).with_context(|| format!("Failed to read word list {wordlist}"))?;
    let dictionary = match seed {
        Some(seed) => WordList::seeded(words, seed),
        None => WordList::new(words),
    };
    dictionary.with_context(|| format!("Unusable word list {wordlist}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist, cli.seed)?;
    let config = DriverConfig {
        shake_duration: Duration::from_millis(cli.shake_ms),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Simple => {
            let mut driver = Driver::new(dictionary, config);
            run_simple(&mut driver).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Replay { path, solution } => {
            run_replay_command(&dictionary, &path, solution.as_deref())
        }
        Commands::Simulate { count } => {
            run_simulate_command(&dictionary, count, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: WordList, config: DriverConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(Driver::new(dictionary, config));
    run_tui(app)
}

fn run_replay_command(dictionary: &WordList, path: &str, solution: Option<&str>) -> Result<()> {
    let state = run_replay(dictionary, path, solution).map_err(|e| anyhow::anyhow!(e))?;
    print_replay_result(&state);
    Ok(())
}

fn run_simulate_command(dictionary: &WordList, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "Simulating {} games over {} words (seed {seed})...",
        count.to_string().bold(),
        dictionary.len()
    );

    let result = run_simulation(dictionary, &SimulateConfig::new(count, seed));
    print_simulation_result(&result);
}
