//! @acp:module "Menu Command"
//! @acp:summary "Interactive single-key menu over the three programs"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Loop: pick a program with A/B/C, run it, then ESC exits or SPACE clears
//! the screen and shows the menu again.

use anyhow::Result;
use console::{style, Key, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::debug;

use super::guess::{execute_guess, GuessOptions};
use super::palindromes::{execute_palindromes, PalindromesOptions};
use super::primes::{execute_primes, PrimesOptions};
use crate::config::Config;

/// Program picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Primes,
    Palindromes,
    Guess,
}

impl MenuChoice {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Char('a') | Key::Char('A') => Some(MenuChoice::Primes),
            Key::Char('b') | Key::Char('B') => Some(MenuChoice::Palindromes),
            Key::Char('c') | Key::Char('C') => Some(MenuChoice::Guess),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuChoice::Primes => "Prime Number Program",
            MenuChoice::Palindromes => "Mirror Number Program",
            MenuChoice::Guess => "Decision Tree Program",
        }
    }
}

/// What to do once a program has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    Exit,
    Clear,
}

impl HomeAction {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Escape => Some(HomeAction::Exit),
            Key::Char(' ') => Some(HomeAction::Clear),
            _ => None,
        }
    }
}

/// Parse a typed bound, tolerating surrounding whitespace
pub fn parse_bound(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

/// Execute the interactive menu
pub fn execute_menu(config: &Config) -> Result<()> {
    let term = Term::stdout();

    loop {
        println!("{}", style("Select a program:").bold());
        println!("  {}: Prime Number", style("A").cyan());
        println!("  {}: Mirror Number", style("B").cyan());
        println!("  {}: Decision Tree", style("C").cyan());

        let key = term.read_key()?;
        match MenuChoice::from_key(&key) {
            Some(choice) => {
                println!("\n{}", style(choice.title()).bold());
                if let Err(err) = run_choice(choice, config) {
                    eprintln!("{} {}", style("✗").red(), err);
                }
            }
            None => {
                debug!(?key, "unmapped menu key");
                println!("{} Invalid input. Try again.", style("!").yellow());
            }
        }

        match wait_for_home_action(&term)? {
            HomeAction::Exit => {
                println!("Exiting program...");
                return Ok(());
            }
            HomeAction::Clear => {
                term.clear_screen()?;
                println!("Screen cleared.");
            }
        }
    }
}

fn run_choice(choice: MenuChoice, config: &Config) -> Result<()> {
    match choice {
        MenuChoice::Primes => execute_primes(
            PrimesOptions {
                bound: read_bound()?,
                algorithm: None,
                json: false,
            },
            config,
        ),
        MenuChoice::Palindromes => execute_palindromes(
            PalindromesOptions {
                bound: read_bound()?,
                json: false,
            },
            config,
        ),
        MenuChoice::Guess => execute_guess(GuessOptions::default(), config),
    }
}

/// Prompt until the operator types something that parses as an integer
fn read_bound() -> Result<i64> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter a number")
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            match parse_bound(input) {
                Some(_) => Ok(()),
                None => Err("Invalid input. Please enter a valid number."),
            }
        })
        .interact_text()?;

    parse_bound(&input).ok_or_else(|| anyhow::anyhow!("not a number: {}", input))
}

fn wait_for_home_action(term: &Term) -> Result<HomeAction> {
    println!(
        "\nPress {} to exit, {} to clear the screen.",
        style("ESC").bold(),
        style("SPACE").bold()
    );
    loop {
        if let Some(action) = HomeAction::from_key(&term.read_key()?) {
            return Ok(action);
        }
    }
}
