//! A single round of the guessing game
//!
//! The round is a small state machine:
//!
//! ```text
//! AwaitingGuess(1) --miss--> AwaitingGuess(2) --miss--> ... AwaitingGuess(budget)
//!        |                          |                            |
//!        +--------hit---------------+----------hit---------------+--> Won(i)
//!                                                                +--miss--> Lost(budget)
//! ```
//!
//! Randomness is never global: the caller passes the generator used to draw
//! the secret, so a seeded generator makes a round fully reproducible.

use super::difficulty::RoundLimits;
use super::feedback::Feedback;
use rand::Rng;
use thiserror::Error;

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for guess number `attempt` (1-based)
    AwaitingGuess { attempt: u32 },
    /// Secret found on guess `attempts_used`
    Won { attempts_used: u32 },
    /// Budget exhausted; `attempts_used` equals the budget
    Lost { attempts_used: u32 },
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess { .. })
    }
}

/// Result of submitting one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Hints for a miss, `None` when the guess was correct
    pub feedback: Option<Feedback>,
    /// State after the guess was applied
    pub state: RoundState,
}

/// Misuse of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is already over")]
    Finished,
}

/// Draw a secret uniformly from `[1, max_number]`
///
/// `max_number` of zero is treated as one.
pub fn generate_secret<R: Rng>(rng: &mut R, max_number: u32) -> u32 {
    rng.random_range(1..=max_number.max(1))
}

/// State of one round in progress
#[derive(Debug, Clone)]
pub struct Round {
    secret: u32,
    limits: RoundLimits,
    guesses: Vec<i64>,
    state: RoundState,
}

impl Round {
    /// Start a round with a freshly drawn secret
    pub fn start<R: Rng>(limits: RoundLimits, rng: &mut R) -> Self {
        let secret = generate_secret(rng, limits.max_number);
        Self::with_secret(limits, secret)
    }

    /// Start a round with a known secret
    ///
    /// A zero budget is raised to one so every round accepts at least one guess,
    /// and the secret is clamped into `[1, max_number]`.
    #[must_use]
    pub fn with_secret(limits: RoundLimits, secret: u32) -> Self {
        let limits = RoundLimits {
            max_number: limits.max_number.max(1),
            attempt_budget: limits.attempt_budget.max(1),
        };
        Self {
            secret: secret.clamp(1, limits.max_number),
            limits,
            guesses: Vec::with_capacity(limits.attempt_budget as usize),
            state: RoundState::AwaitingGuess { attempt: 1 },
        }
    }

    /// Apply a guess and advance the state machine
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round already reached `Won` or `Lost`.
    ///
    /// # Examples
    /// ```
    /// use hotcold::core::{Round, RoundLimits, RoundState};
    ///
    /// let limits = RoundLimits { max_number: 50, attempt_budget: 15 };
    /// let mut round = Round::with_secret(limits, 27);
    ///
    /// let turn = round.guess(10).unwrap();
    /// assert_eq!(turn.feedback.unwrap().to_string(), "cold, secret is larger");
    ///
    /// let turn = round.guess(27).unwrap();
    /// assert_eq!(turn.state, RoundState::Won { attempts_used: 2 });
    /// ```
    pub fn guess(&mut self, guess: i64) -> Result<Turn, RoundError> {
        let RoundState::AwaitingGuess { attempt } = self.state else {
            return Err(RoundError::Finished);
        };

        if guess == i64::from(self.secret) {
            self.state = RoundState::Won {
                attempts_used: attempt,
            };
            return Ok(Turn {
                feedback: None,
                state: self.state,
            });
        }

        self.guesses.push(guess);
        let feedback = Feedback::evaluate(guess, i64::from(self.secret));

        self.state = if attempt < self.limits.attempt_budget {
            RoundState::AwaitingGuess {
                attempt: attempt + 1,
            }
        } else {
            RoundState::Lost {
                attempts_used: self.limits.attempt_budget,
            }
        };

        Ok(Turn {
            feedback: Some(feedback),
            state: self.state,
        })
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> u32 {
        self.secret
    }

    #[inline]
    #[must_use]
    pub const fn limits(&self) -> RoundLimits {
        self.limits
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Missed guesses so far, in order
    #[must_use]
    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    /// Guesses left before the round is lost
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        match self.state {
            RoundState::AwaitingGuess { attempt } => self.limits.attempt_budget - attempt + 1,
            RoundState::Won { .. } | RoundState::Lost { .. } => 0,
        }
    }
}
