//! Core domain types for the guessing game
//!
//! Difficulty tiers, feedback classification and the per-round state machine.
//! Nothing here touches the terminal or the filesystem.

mod difficulty;
mod feedback;
mod round;

pub use difficulty::{DifficultyError, DifficultyTier, RoundLimits, select};
pub use feedback::{Direction, Feedback, HOT_MAX_DISTANCE, Proximity, WARM_MAX_DISTANCE};
pub use round::{Round, RoundError, RoundState, Turn, generate_secret};
