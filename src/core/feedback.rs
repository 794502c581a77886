//! Proximity feedback for a missed guess
//!
//! A miss is described by two independent hints:
//! - how close the guess was (hot / warm / cold, from the absolute distance)
//! - which way the secret lies (larger / smaller)
//!
//! Thresholds are fixed: distance 0-5 is hot, 6-15 is warm, 16+ is cold.

use std::fmt;

/// Largest distance still reported as hot
pub const HOT_MAX_DISTANCE: u64 = 5;

/// Largest distance still reported as warm
pub const WARM_MAX_DISTANCE: u64 = 15;

/// Closeness of a guess to the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    Hot,
    Warm,
    Cold,
}

impl Proximity {
    /// Classify an absolute distance
    ///
    /// # Examples
    /// ```
    /// use hotcold::core::Proximity;
    ///
    /// assert_eq!(Proximity::classify(5), Proximity::Hot);
    /// assert_eq!(Proximity::classify(6), Proximity::Warm);
    /// assert_eq!(Proximity::classify(16), Proximity::Cold);
    /// ```
    #[must_use]
    pub const fn classify(distance: u64) -> Self {
        if distance <= HOT_MAX_DISTANCE {
            Self::Hot
        } else if distance <= WARM_MAX_DISTANCE {
            Self::Warm
        } else {
            Self::Cold
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }
}

/// Where the secret lies relative to the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Secret is larger than the guess
    Larger,
    /// Secret is smaller than the guess
    Smaller,
}

impl Direction {
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Larger => "secret is larger",
            Self::Smaller => "secret is smaller",
        }
    }
}

/// Both hints for one missed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub proximity: Proximity,
    pub direction: Direction,
}

impl Feedback {
    /// Feedback for `guess` against `secret`
    ///
    /// Only meaningful for a miss; a guess equal to the secret is handled by
    /// the round before feedback is computed and would read as "smaller".
    #[must_use]
    pub const fn evaluate(guess: i64, secret: i64) -> Self {
        let direction = if guess < secret {
            Direction::Larger
        } else {
            Direction::Smaller
        };
        Self {
            proximity: Proximity::classify(guess.abs_diff(secret)),
            direction,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.proximity.label(), self.direction.hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_exact() {
        assert_eq!(Proximity::classify(0), Proximity::Hot);
        assert_eq!(Proximity::classify(5), Proximity::Hot);
        assert_eq!(Proximity::classify(6), Proximity::Warm);
        assert_eq!(Proximity::classify(15), Proximity::Warm);
        assert_eq!(Proximity::classify(16), Proximity::Cold);
        assert_eq!(Proximity::classify(u64::MAX), Proximity::Cold);
    }

    #[test]
    fn distance_is_symmetric() {
        // Same distance either side of the secret gives the same tier
        for offset in [1_i64, 5, 6, 15, 16, 40] {
            let below = Feedback::evaluate(100 - offset, 100);
            let above = Feedback::evaluate(100 + offset, 100);
            assert_eq!(below.proximity, above.proximity, "offset {offset}");
            assert_eq!(below.direction, Direction::Larger);
            assert_eq!(above.direction, Direction::Smaller);
        }
    }

    #[test]
    fn extreme_guesses_do_not_overflow() {
        let fb = Feedback::evaluate(i64::MIN, 200);
        assert_eq!(fb.proximity, Proximity::Cold);
        assert_eq!(fb.direction, Direction::Larger);

        let fb = Feedback::evaluate(i64::MAX, 1);
        assert_eq!(fb.proximity, Proximity::Cold);
        assert_eq!(fb.direction, Direction::Smaller);
    }

    #[test]
    fn display_puts_label_before_direction() {
        assert_eq!(Feedback::evaluate(10, 27).to_string(), "cold, secret is larger");
        assert_eq!(Feedback::evaluate(30, 27).to_string(), "hot, secret is smaller");
        assert_eq!(Feedback::evaluate(17, 27).to_string(), "warm, secret is larger");
    }
}
