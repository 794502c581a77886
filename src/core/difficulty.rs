//! Difficulty tiers
//!
//! Each tier fixes the range the secret is drawn from and how many guesses the
//! player gets. The mapping is a constant table; nothing here performs I/O.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Secret range and attempt budget for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundLimits {
    /// Upper bound of the secret (inclusive, lower bound is always 1)
    pub max_number: u32,
    /// Maximum number of guesses before the round is lost
    pub attempt_budget: u32,
}

/// Named difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

/// Rejected tier choice
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DifficultyError {
    #[error("difficulty must be a number, got '{0}'")]
    NotANumber(String),
    #[error("difficulty must be 1, 2 or 3, got {0}")]
    OutOfRange(i64),
}

impl DifficultyTier {
    /// All tiers in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// The numeric menu choice for this tier (1-3)
    #[must_use]
    pub const fn choice(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Resolve a numeric menu choice
    ///
    /// # Errors
    /// Returns `DifficultyError::OutOfRange` for anything outside 1-3.
    pub const fn from_choice(choice: i64) -> Result<Self, DifficultyError> {
        match choice {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(DifficultyError::OutOfRange(other)),
        }
    }

    /// Secret range and attempt budget for this tier
    #[must_use]
    pub const fn limits(self) -> RoundLimits {
        let (max_number, attempt_budget) = match self {
            Self::Easy => (50, 15),
            Self::Medium => (100, 10),
            Self::Hard => (200, 5),
        };
        RoundLimits {
            max_number,
            attempt_budget,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyTier {
    type Err = DifficultyError;

    /// Accepts "1".."3" or a tier name in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(tier) = Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(trimmed))
        {
            return Ok(tier);
        }

        let choice: i64 = trimmed
            .parse()
            .map_err(|_| DifficultyError::NotANumber(trimmed.to_string()))?;
        Self::from_choice(choice)
    }
}

/// Map a raw tier choice to its round limits
///
/// # Errors
/// Returns `DifficultyError` if the choice is not a known tier; the caller is
/// expected to re-prompt.
///
/// # Examples
/// ```
/// use hotcold::core::select;
///
/// let limits = select("2").unwrap();
/// assert_eq!((limits.max_number, limits.attempt_budget), (100, 10));
/// assert!(select("4").is_err());
/// ```
pub fn select(choice: &str) -> Result<RoundLimits, DifficultyError> {
    choice.parse::<DifficultyTier>().map(DifficultyTier::limits)
}
