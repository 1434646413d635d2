#![forbid(unsafe_code)]
//! numtrio Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use numtrio::commands::{
    execute_guess, execute_menu, execute_palindromes, execute_primes, GuessOptions,
    PalindromesOptions, PrimesOptions,
};
use numtrio::config::DEFAULT_CONFIG_FILE;
use numtrio::{AlgorithmChoice, Config};

#[derive(Parser)]
#[command(name = "numtrio")]
#[command(about = "Prime numbers, mirror numbers and a guessing game")]
#[command(version)]
struct Cli {
    /// Program to run; the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (A: primes, B: mirror numbers, C: guessing game)
    Menu,

    /// List primes up to a bound
    Primes {
        /// Inclusive upper bound
        #[arg(allow_negative_numbers = true)]
        bound: i64,

        /// Algorithm: auto, trial-division or witness-list
        #[arg(short, long, default_value = "auto")]
        algorithm: AlgorithmChoice,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List mirror (palindromic) numbers up to a bound
    Palindromes {
        /// Inclusive upper bound
        #[arg(allow_negative_numbers = true)]
        bound: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the number guessing game
    Guess {
        /// Scripted answers, e.g. "n,y,n,n,y" (interactive when omitted)
        #[arg(long)]
        answers: Option<String>,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "numtrio=debug" } else { "numtrio=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let config = Config::load_or_default(&cli.config)?;
    tracing::debug!(?config, "config loaded");

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            execute_menu(&config)?;
        }

        Commands::Primes { bound, algorithm, json } => {
            let options = PrimesOptions {
                bound,
                algorithm: algorithm.forced(),
                json,
            };
            execute_primes(options, &config)?;
        }

        Commands::Palindromes { bound, json } => {
            let options = PalindromesOptions { bound, json };
            execute_palindromes(options, &config)?;
        }

        Commands::Guess { answers, json } => {
            let options = GuessOptions { answers, json };
            execute_guess(options, &config)?;
        }
    }

    Ok(())
}
