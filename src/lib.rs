//! Hot/Cold
//!
//! A terminal number-guessing game: guess the secret within the attempt budget
//! of the chosen difficulty, guided by hot/warm/cold hints. Finished rounds are
//! kept in a JSON result log.
//!
//! # Quick Start
//!
//! ```rust
//! use hotcold::core::{DifficultyTier, Round, RoundState};
//!
//! let mut round = Round::with_secret(DifficultyTier::Hard.limits(), 120);
//!
//! let turn = round.guess(115).unwrap();
//! println!("{}", turn.feedback.unwrap()); // hot, secret is larger
//!
//! let turn = round.guess(120).unwrap();
//! assert_eq!(turn.state, RoundState::Won { attempts_used: 2 });
//! ```

// Core domain types
pub mod core;

// Result persistence
pub mod store;

// Operator input
pub mod console;

// Terminal output formatting
pub mod output;

// Round orchestration
pub mod session;

// Diagnostic logging setup
pub mod logging;
