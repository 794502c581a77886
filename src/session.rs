//! Game session loop
//!
//! Shows the stored history, then plays rounds until the operator declines a
//! replay. Every finished round is appended to the result store; a failed
//! write is reported and play carries on.

use crate::console::{Console, ConsoleError};
use crate::core::{Round, RoundState, Turn};
use crate::output::display;
use crate::store::{DEFAULT_RESULTS_PATH, JsonFileStore, Outcome, ResultStore, Verdict};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Where the result log lives
    pub results_path: PathBuf,
    /// Fixed RNG seed, `None` to seed from the OS
    pub seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub fn new(results_path: impl Into<PathBuf>) -> Self {
        Self {
            results_path: results_path.into(),
            seed: None,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The session's random source, seeded once
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_PATH)
    }
}

/// Tally of the rounds finished in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub wins: u32,
    pub losses: u32,
}

impl SessionSummary {
    fn record(&mut self, verdict: Verdict) {
        self.rounds_played += 1;
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
        }
    }
}

/// An interactive run of one or more rounds
pub struct Session<S, R, W> {
    store: S,
    rng: StdRng,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<JsonFileStore, R, W> {
    /// Session backed by the result file named in `config`
    pub fn from_config(config: &SessionConfig, input: R, out: W) -> Self {
        Self::new(
            JsonFileStore::new(config.results_path.clone()),
            config.rng(),
            Console::new(input, out),
        )
    }
}

impl<S: ResultStore, R: BufRead, W: Write> Session<S, R, W> {
    pub const fn new(store: S, rng: StdRng, console: Console<R, W>) -> Self {
        Self {
            store,
            rng,
            console,
        }
    }

    /// Play until the operator declines a replay or input ends
    ///
    /// # Errors
    ///
    /// Returns an I/O error only if the terminal itself fails.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        let history = self.store.load();
        display::print_results(self.console.out(), &history)?;

        let mut summary = SessionSummary::default();
        loop {
            match self.play_round() {
                Ok(outcome) => summary.record(outcome.verdict()),
                Err(ConsoleError::Closed) => {
                    debug!("input closed during round");
                    break;
                }
                Err(ConsoleError::Io(e)) => return Err(e),
            }

            match self.console.confirm_replay() {
                Ok(true) => {}
                Ok(false) | Err(ConsoleError::Closed) => break,
                Err(ConsoleError::Io(e)) => return Err(e),
            }
        }

        display::print_farewell(self.console.out())?;
        info!(
            rounds = summary.rounds_played,
            wins = summary.wins,
            losses = summary.losses,
            "session finished"
        );
        Ok(summary)
    }

    /// Choose a difficulty, play one round to the end and record it
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` if input ends before the round does;
    /// nothing is recorded in that case.
    pub fn play_round(&mut self) -> Result<Outcome, ConsoleError> {
        let tier = self.console.read_difficulty()?;
        let limits = tier.limits();
        let mut round = Round::start(limits, &mut self.rng);
        info!(
            %tier,
            max_number = limits.max_number,
            budget = limits.attempt_budget,
            "round started"
        );
        display::print_round_start(self.console.out(), limits)?;

        let (verdict, attempts_used) = loop {
            match round.state() {
                RoundState::AwaitingGuess { attempt } => {
                    let guess = self.console.read_guess(attempt, limits.attempt_budget)?;
                    match round.guess(guess) {
                        Ok(Turn {
                            feedback: Some(feedback),
                            ..
                        }) => {
                            display::print_feedback(
                                self.console.out(),
                                &feedback,
                                round.guesses(),
                            )?;
                        }
                        Ok(Turn { feedback: None, .. }) => {}
                        // Only returned for a terminal state, which the next pass breaks on
                        Err(e) => {
                            warn!(error = %e, state = ?round.state(), "guess after round ended");
                            debug_assert!(round.state().is_terminal());
                        }
                    }
                }
                RoundState::Won { attempts_used } => break (Verdict::Win, attempts_used),
                RoundState::Lost { attempts_used } => break (Verdict::Loss, attempts_used),
            }
        };

        match verdict {
            Verdict::Win => display::print_win(self.console.out(), attempts_used)?,
            Verdict::Loss => display::print_loss(self.console.out(), round.secret())?,
        }
        info!(%verdict, attempts_used, "round finished");

        let outcome = Outcome::now(verdict, attempts_used);
        if let Err(e) = self.store.append(outcome.clone()) {
            warn!(error = %e, "round result not saved");
            display::print_store_error(self.console.out(), &e)?;
        }
        Ok(outcome)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Tear down the session, returning the store and the output stream
    pub fn into_parts(self) -> (S, W) {
        (self.store, self.console.into_output())
    }
}
