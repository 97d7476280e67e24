//! Simple line-oriented mode
//!
//! Each input line is a guess. The line is typed into the game one letter at
//! a time and submitted, exactly as the TUI would do it.

use crate::driver::Driver;
use crate::game::{Action, MAX_GUESSES};
use crate::output::display::{print_game_over, write_board, write_keyboard};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Guess(String),
    Restart,
    Help,
    Quit,
    Invalid(String),
}

/// Interpret one line of input
#[must_use]
pub fn parse_line(line: &str) -> LineCommand {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        ":q" | ":quit" | ":exit" => LineCommand::Quit,
        ":n" | ":new" | ":restart" => LineCommand::Restart,
        ":h" | ":help" | "?" => LineCommand::Help,
        _ if line.chars().count() > 5 => {
            LineCommand::Invalid(format!("'{line}' is longer than 5 letters"))
        }
        _ if !line.chars().all(|c| c.is_ascii_alphabetic()) => {
            LineCommand::Invalid(format!("'{line}' contains non-letters"))
        }
        _ => LineCommand::Guess(line.to_string()),
    }
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<D: Dictionary>(driver: &mut Driver<D>) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(driver, stdin.lock(), stdout.lock())
}

/// Run the simple mode on any reader/writer pair
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<D: Dictionary, R: BufRead, W: Write>(
    driver: &mut Driver<D>,
    input: R,
    mut output: W,
) -> Result<(), String> {
    print_banner(&mut output).map_err(|e| e.to_string())?;
    prompt(driver, &mut output).map_err(|e| e.to_string())?;

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;

        match parse_line(&line) {
            LineCommand::Quit => break,
            LineCommand::Help => print_help(&mut output).map_err(|e| e.to_string())?,
            LineCommand::Restart => {
                driver.dispatch(Action::Restart, Instant::now());
                writeln!(output, "\n🔄 New game started!\n").map_err(|e| e.to_string())?;
            }
            LineCommand::Invalid(reason) => {
                writeln!(output, "{}", format!("❌ {reason}").red()).map_err(|e| e.to_string())?;
            }
            LineCommand::Guess(word) => {
                if driver.state().is_over() {
                    writeln!(output, "Game is over. Type :new to play again.")
                        .map_err(|e| e.to_string())?;
                } else {
                    submit_guess(driver, &word, &mut output).map_err(|e| e.to_string())?;
                }
            }
        }

        prompt(driver, &mut output).map_err(|e| e.to_string())?;
    }

    writeln!(output, "\n👋 Thanks for playing!\n").map_err(|e| e.to_string())
}

fn submit_guess<D: Dictionary, W: Write>(
    driver: &mut Driver<D>,
    word: &str,
    output: &mut W,
) -> io::Result<()> {
    let now = Instant::now();
    for c in word.chars() {
        driver.dispatch(Action::TypeChar(c), now);
    }
    driver.dispatch(Action::SubmitRow, now);

    if driver.state().shake() {
        let reason = if word.chars().count() < 5 {
            "Not enough letters!"
        } else {
            "Not a word!"
        };
        writeln!(output, "{}", format!("❌ {reason}").red().bold())?;

        // Line mode has no animation; clear the flag and the rejected row now
        driver.dispatch(Action::ClearShake, now);
        while !driver.state().buffer().is_empty() {
            driver.dispatch(Action::RemoveChar, now);
        }
        return Ok(());
    }

    writeln!(output)?;
    write_board(driver.state(), output)?;
    writeln!(output)?;
    write_keyboard(driver.state().keyboard(), output)?;

    if driver.state().is_over() {
        print_game_over(driver.state(), driver.statistics(), output)?;
    }
    Ok(())
}

fn prompt<D: Dictionary, W: Write>(driver: &Driver<D>, output: &mut W) -> io::Result<()> {
    let state = driver.state();
    if state.is_over() {
        write!(output, "{} ", "[:new / :quit] >".bright_black())?;
    } else {
        write!(
            output,
            "{} ",
            format!("Guess {}/{MAX_GUESSES} >", state.current_row_index() + 1).cyan()
        )?;
    }
    output.flush()
}

fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    writeln!(output, "{}", "            W O R D L E".bright_green().bold())?;
    writeln!(output, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(output, "Guess the hidden 5-letter word in {MAX_GUESSES} tries.")?;
    writeln!(output, "Type :help for commands.\n")
}

fn print_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "  <word>    submit a 5-letter guess")?;
    writeln!(output, "  :new      start a new game")?;
    writeln!(output, "  :quit     exit")
}
