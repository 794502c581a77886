//! Display functions for the game session
//!
//! Everything writes to a caller-supplied writer so the session can run
//! against stdout or an in-memory buffer alike.

use super::formatters::{
    attempts_noun, direction_icon, format_guess_list, format_outcome_line, proximity_icon,
};
use crate::core::{DifficultyTier, Feedback, RoundLimits};
use crate::store::{ResultLog, StoreError};
use colored::Colorize;
use std::io::{self, Write};

/// Print the stored result history, or a notice when there is none
pub fn print_results<W: Write>(out: &mut W, log: &ResultLog) -> io::Result<()> {
    if log.is_empty() {
        writeln!(out, "{}", "No previous results.".yellow())?;
        return Ok(());
    }

    writeln!(out, "{}", "Previous results:".yellow())?;
    for (i, outcome) in log.iter().enumerate() {
        writeln!(out, "{}", format_outcome_line(i + 1, outcome))?;
    }
    writeln!(out)
}

/// Print the difficulty menu and the input prompt
pub fn print_difficulty_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Choose a difficulty:".blue())?;
    for tier in DifficultyTier::ALL {
        let limits = tier.limits();
        writeln!(
            out,
            "{} - {} (1-{}, {} {})",
            tier.choice(),
            tier,
            limits.max_number,
            limits.attempt_budget,
            attempts_noun(limits.attempt_budget)
        )?;
    }
    write!(out, "Choice: ")?;
    out.flush()
}

pub fn print_invalid_difficulty<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Invalid difficulty! Enter 1, 2 or 3.".red())
}

pub fn print_round_start<W: Write>(out: &mut W, limits: RoundLimits) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Game on! I'm thinking of a number from 1 to {}.",
            limits.max_number
        )
        .yellow()
    )
}

pub fn print_guess_prompt<W: Write>(out: &mut W, attempt: u32, budget: u32) -> io::Result<()> {
    write!(
        out,
        "{} Enter a number: ",
        format!("Attempt {attempt}/{budget}:").yellow()
    )?;
    out.flush()
}

pub fn print_invalid_guess<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Error: enter a whole NUMBER!".red())
}

/// Print both hints for a miss, followed by the guesses made so far
pub fn print_feedback<W: Write>(
    out: &mut W,
    feedback: &Feedback,
    guesses: &[i64],
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        proximity_icon(feedback.proximity),
        feedback.proximity.label()
    )?;
    writeln!(
        out,
        "{} {}",
        feedback.direction.hint(),
        direction_icon(feedback.direction)
    )?;
    writeln!(out, "Previous guesses: {}", format_guess_list(guesses))?;
    writeln!(out)
}

pub fn print_win<W: Write>(out: &mut W, attempts_used: u32) -> io::Result<()> {
    writeln!(
        out,
        "{} Got it in {} {}.",
        "You guessed it! 🙌".green().bold(),
        attempts_used,
        attempts_noun(attempts_used)
    )
}

pub fn print_loss<W: Write>(out: &mut W, secret: u32) -> io::Result<()> {
    writeln!(
        out,
        "{} The secret number was: {secret}",
        "You lost! 😢".red().bold()
    )
}

pub fn print_store_error<W: Write>(out: &mut W, error: &StoreError) -> io::Result<()> {
    writeln!(out, "{}", format!("Could not save results: {error}").red())
}

pub fn print_replay_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", "Play again? (y/n): ".blue())?;
    out.flush()
}

pub fn print_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Thanks for playing! 🔥".green())
}
