//! Formatting utilities for terminal output

use crate::core::{Direction, Proximity};
use crate::store::Outcome;

/// Emoji shown next to a proximity label
#[must_use]
pub const fn proximity_icon(proximity: Proximity) -> &'static str {
    match proximity {
        Proximity::Hot => "🔥",
        Proximity::Warm => "🙂",
        Proximity::Cold => "❄️",
    }
}

/// Emoji shown next to a direction hint
#[must_use]
pub const fn direction_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Larger => "👆",
        Direction::Smaller => "👇",
    }
}

/// "attempt" or "attempts"
#[must_use]
pub const fn attempts_noun(count: u32) -> &'static str {
    if count == 1 { "attempt" } else { "attempts" }
}

/// One numbered line of the result listing, e.g. `1) 2026-10-16 10:00:00 - win (3 attempts)`
#[must_use]
pub fn format_outcome_line(number: usize, outcome: &Outcome) -> String {
    format!(
        "{number}) {} - {} ({} {})",
        outcome.timestamp(),
        outcome.verdict(),
        outcome.attempts_used(),
        attempts_noun(outcome.attempts_used())
    )
}

/// Previous guesses as a bracketed list, e.g. `[10, 40]`
#[must_use]
pub fn format_guess_list(guesses: &[i64]) -> String {
    let joined: Vec<String> = guesses.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Verdict;

    #[test]
    fn outcome_line_plural() {
        let outcome = Outcome::new("2026-10-16 10:00:00", Verdict::Win, 3);
        assert_eq!(
            format_outcome_line(1, &outcome),
            "1) 2026-10-16 10:00:00 - win (3 attempts)"
        );
    }

    #[test]
    fn outcome_line_singular() {
        let outcome = Outcome::new("2026-10-16 10:00:00", Verdict::Win, 1);
        assert_eq!(
            format_outcome_line(12, &outcome),
            "12) 2026-10-16 10:00:00 - win (1 attempt)"
        );
    }

    #[test]
    fn guess_list_empty() {
        assert_eq!(format_guess_list(&[]), "[]");
    }

    #[test]
    fn guess_list_keeps_order() {
        assert_eq!(format_guess_list(&[10, 40, -3]), "[10, 40, -3]");
    }
}
