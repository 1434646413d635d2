//! @acp:module "Output Formatting"
//! @acp:summary "Shared helpers for printing number lists"
//! @acp:domain cli
//! @acp:layer utility

use console::{style, Term};

/// Fallback line width when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

/// Current terminal width, or a sane default when piped
pub fn terminal_width() -> usize {
    let term = Term::stdout();
    if term.is_term() {
        let (_, cols) = term.size();
        (cols as usize).max(20)
    } else {
        DEFAULT_WIDTH
    }
}

/// Lay numbers out space-separated, breaking lines before `width` columns
pub fn wrap_numbers(values: &[u64], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for value in values {
        let token = value.to_string();
        if !current.is_empty() && current.len() + 1 + token.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&token);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Print a method heading, the numbers, and a count footer
pub fn print_numbers(heading: &str, values: &[u64]) {
    println!("{} Using {}...", style("→").cyan(), heading);
    if values.is_empty() {
        println!("  {}", style("(none)").dim());
    } else {
        for line in wrap_numbers(values, terminal_width()) {
            println!("{}", line);
        }
    }
    println!("  {} found", style(values.len()).bold());
}
