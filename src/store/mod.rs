//! Result persistence
//!
//! Keeps the chronological log of finished rounds. Loading never fails: a
//! missing or unreadable log is simply empty. Appending rewrites the whole log
//! and may fail, which callers report without aborting the game.

mod error;
pub mod file;
mod outcome;

pub use error::StoreError;
pub use file::{DEFAULT_RESULTS_PATH, JsonFileStore};
pub use outcome::{DATE_FORMAT, Outcome, ResultLog, Verdict};

/// Durable home of the result log
pub trait ResultStore {
    /// Read the full log, empty if nothing has been stored yet
    fn load(&self) -> ResultLog;

    /// Add `outcome` to the end of the log and persist it
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the log could not be written.
    fn append(&mut self, outcome: Outcome) -> Result<(), StoreError>;
}
