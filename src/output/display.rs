//! Display functions for boards and command results

use super::formatters::{create_progress_bar, emoji_grid, keyboard_lines, plain_row, scored_row};
use crate::commands::SimulationResult;
use crate::core::KeyboardStatus;
use crate::driver::Statistics;
use crate::game::{GameState, MAX_GUESSES};
use colored::Colorize;
use std::io::{self, Write};

/// Write all six rows of the board
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(state: &GameState, output: &mut W) -> io::Result<()> {
    for (r, row) in state.board().iter().enumerate() {
        let line = if let Some(feedback) = state.row_feedback(r) {
            scored_row(row, &feedback)
        } else if r == state.current_row_index() && !state.is_over() {
            plain_row(&state.current_row())
        } else {
            plain_row(row)
        };
        writeln!(output, "  {line}")?;
    }
    Ok(())
}

/// Write the coloured keyboard
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_keyboard<W: Write>(keys: &KeyboardStatus, output: &mut W) -> io::Result<()> {
    for line in keyboard_lines(keys) {
        writeln!(output, "  {line}")?;
    }
    Ok(())
}

/// Write the end-of-game summary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_game_over<W: Write>(
    state: &GameState,
    stats: &Statistics,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(40).bright_cyan())?;
    if state.is_win() {
        let turns = state.current_row_index();
        writeln!(
            output,
            "{}",
            format!(
                "🎉 You found it in {turns} {}!",
                if turns == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        )?;
    } else {
        writeln!(output, "{}", "Game Over!".red().bold())?;
        writeln!(
            output,
            "The word was {}",
            state.solution().text().bright_yellow().bold()
        )?;
    }

    let rows: Vec<_> = (0..state.current_row_index())
        .filter_map(|r| state.row_feedback(r))
        .collect();
    writeln!(output, "\n{}\n", emoji_grid(&rows))?;

    write_statistics(stats, output)?;
    writeln!(output, "{}", "═".repeat(40).bright_cyan())
}

/// Write session statistics with a guess distribution histogram
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(stats: &Statistics, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "Played: {}  Won: {}  Win rate: {:.0}%  Streak: {} (max {})",
        stats.total_games,
        stats.games_won,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        writeln!(
            output,
            "  {}: {} {count}",
            i + 1,
            create_progress_bar(count as f64, max as f64, 20).green()
        )?;
    }
    Ok(())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let stats = &result.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", " Simulation Results ".bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nGames played:    {}", stats.total_games);
    println!(
        "Games won:       {} ({:.1}%)",
        stats.games_won.to_string().green().bold(),
        stats.win_rate()
    );
    println!(
        "Games lost:      {}",
        (stats.total_games - stats.games_won).to_string().red()
    );
    if let Some(avg) = stats.average_guesses() {
        println!("Average guesses: {avg:.3} (wins only)");
    }
    println!("Longest streak:  {}", stats.max_streak);

    println!("\n{}", "Guess distribution:".bold());
    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let pct = if stats.total_games > 0 {
            count as f64 / stats.total_games as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "  {}/{MAX_GUESSES}: {} {count:>6} ({pct:5.1}%)",
            i + 1,
            create_progress_bar(count as f64, max as f64, 30).cyan()
        );
    }

    if let Some(loss) = result.games.iter().find(|g| !g.state.is_win()) {
        println!(
            "\nExample loss: {} after {}",
            loss.solution.bright_yellow(),
            loss.guesses.join(", ")
        );
    }

    println!(
        "\nTime: {:.2}s ({:.0} games/sec)",
        result.duration.as_secs_f64(),
        result.games_per_second
    );
}

/// Print the final state of a replayed script
pub fn print_replay_result(state: &GameState) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Errors writing to stdout are not actionable here
    let _ = write_board(state, &mut out);
    let _ = writeln!(out);
    let _ = write_keyboard(state.keyboard(), &mut out);

    println!();
    println!("Row:     {}/{MAX_GUESSES}", state.current_row_index());
    println!("Buffer:  {}", state.buffer_text());
    println!("Shake:   {}", state.shake());
    if state.is_over() {
        let outcome = if state.is_win() {
            "won".green().bold()
        } else {
            "lost".red().bold()
        };
        println!("Outcome: {outcome} (solution {})", state.solution());
    } else {
        println!("Outcome: in progress");
    }
}
