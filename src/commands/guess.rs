//! @acp:module "Guess Command"
//! @acp:summary "Play the binary-search guessing game"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::{style, Key, Term};

use crate::config::Config;
use crate::game::{GameOutcome, GuessingGame, Oracle, Question, ScriptedOracle};

/// Options for the guess command
#[derive(Debug, Clone, Default)]
pub struct GuessOptions {
    /// Scripted answers (y/n list) instead of interactive prompts
    pub answers: Option<String>,
    /// Output the outcome as JSON
    pub json: bool,
}

/// Map a key press to a yes/no answer; `None` for any other key
pub fn answer_from_key(key: &Key) -> Option<bool> {
    match key {
        Key::Char('y') | Key::Char('Y') => Some(true),
        Key::Char('n') | Key::Char('N') => Some(false),
        _ => None,
    }
}

/// Asks the person at the terminal, re-prompting until y or n is pressed
pub struct PromptOracle {
    term: Term,
}

impl Default for PromptOracle {
    fn default() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Oracle for PromptOracle {
    fn answer(&mut self, question: &Question) -> crate::Result<bool> {
        let prompt = format!("{} {} ", question, style("(y/n):").dim());
        self.term.write_str(&prompt)?;
        loop {
            let key = self.term.read_key()?;
            match answer_from_key(&key) {
                Some(answer) => {
                    self.term.write_line(if answer { "yes" } else { "no" })?;
                    return Ok(answer);
                }
                None => {
                    self.term.write_line("")?;
                    self.term.write_str(&format!(
                        "{} Invalid input. Press 'y' for Yes or 'n' for No. ",
                        style("!").yellow()
                    ))?;
                }
            }
        }
    }
}

/// Execute the guess command
pub fn execute_guess(options: GuessOptions, config: &Config) -> Result<()> {
    let game = GuessingGame::from_config(&config.game);

    let outcome = match options.answers.as_deref() {
        Some(script) => game.play(&mut ScriptedOracle::parse(script)?)?,
        None => {
            println!(
                "Think of a number between {} and {}.",
                style(game.low()).bold(),
                style(game.high()).bold()
            );
            game.play(&mut PromptOracle::default())?
        }
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn print_outcome(outcome: &GameOutcome) {
    match outcome {
        GameOutcome::Found { number, guesses } => {
            println!(
                "{} Your number is {}! ({} guesses)",
                style("✓").green(),
                style(number).bold(),
                guesses
            );
        }
        GameOutcome::Exhausted { guesses } => {
            eprintln!(
                "{} No consistent answer found after {} guesses; check your answers and try again.",
                style("✗").red(),
                guesses
            );
        }
    }
}
