//! Persisted round results
//!
//! On disk the log is a JSON array of records:
//!
//! ```json
//! [{ "date": "2026-10-16 21:04:11", "outcome": "win", "attempts": 4 }]
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    // Aliases keep result files from the localized release readable
    #[serde(rename = "win", alias = "Победа")]
    Win,
    #[serde(rename = "loss", alias = "Проигрыш")]
    Loss,
}

impl Verdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(rename = "date")]
    timestamp: String,
    #[serde(rename = "outcome")]
    verdict: Verdict,
    #[serde(rename = "attempts")]
    attempts_used: u32,
}

impl Outcome {
    /// Record an outcome with an explicit timestamp string
    #[must_use]
    pub fn new(timestamp: impl Into<String>, verdict: Verdict, attempts_used: u32) -> Self {
        Self {
            timestamp: timestamp.into(),
            verdict,
            attempts_used,
        }
    }

    /// Record an outcome stamped with the current local time
    #[must_use]
    pub fn now(verdict: Verdict, attempts_used: u32) -> Self {
        Self::at(Local::now().naive_local(), verdict, attempts_used)
    }

    /// Record an outcome stamped with `at`
    #[must_use]
    pub fn at(at: NaiveDateTime, verdict: Verdict, attempts_used: u32) -> Self {
        Self::new(at.format(DATE_FORMAT).to_string(), verdict, attempts_used)
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }
}

/// Chronological list of outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultLog(Vec<Outcome>);

impl ResultLog {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.0.push(outcome);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.0.iter()
    }

    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.0
    }
}

impl From<Vec<Outcome>> for ResultLog {
    fn from(outcomes: Vec<Outcome>) -> Self {
        Self(outcomes)
    }
}

impl<'a> IntoIterator for &'a ResultLog {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
