//! Operator input
//!
//! Input is read as whitespace-separated tokens, so "4 2" on one line answers
//! two prompts. A token that does not parse is discarded on its own and the
//! same prompt is shown again; the retry has no upper bound.

use crate::core::DifficultyTier;
use crate::output::display;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Failure to obtain an answer from the operator
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("input closed")]
    Closed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Splits line-buffered input into whitespace-separated tokens
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub const fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed; `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying reader fails.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Bytes that are not UTF-8 become U+FFFD and fail to parse like any junk token
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}

/// Prompting front end over an input and an output stream
pub struct Console<R, W> {
    reader: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self {
            reader: TokenReader::new(input),
            out,
        }
    }

    /// Output stream for non-prompt messages
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn token(&mut self) -> Result<String, ConsoleError> {
        self.reader.next_token()?.ok_or(ConsoleError::Closed)
    }

    /// Ask for a difficulty until a valid tier is entered
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` if input ends first.
    pub fn read_difficulty(&mut self) -> Result<DifficultyTier, ConsoleError> {
        loop {
            display::print_difficulty_menu(&mut self.out)?;
            let token = self.token()?;
            match token.parse::<DifficultyTier>() {
                Ok(tier) => return Ok(tier),
                Err(e) => {
                    debug!(input = %token, error = %e, "rejected difficulty");
                    display::print_invalid_difficulty(&mut self.out)?;
                }
            }
        }
    }

    /// Ask for guess number `attempt` until an integer is entered
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` if input ends first.
    pub fn read_guess(&mut self, attempt: u32, budget: u32) -> Result<i64, ConsoleError> {
        loop {
            display::print_guess_prompt(&mut self.out, attempt, budget)?;
            let token = self.token()?;
            match token.parse::<i64>() {
                Ok(guess) => return Ok(guess),
                Err(_) => {
                    debug!(input = %token, attempt, "rejected guess");
                    display::print_invalid_guess(&mut self.out)?;
                }
            }
        }
    }

    /// Ask whether to play again; only "y" (any case) means yes
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` if input ends first.
    pub fn confirm_replay(&mut self) -> Result<bool, ConsoleError> {
        display::print_replay_prompt(&mut self.out)?;
        let answer = self.token()?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        console_bytes(input.as_bytes())
    }

    fn console_bytes(input: &[u8]) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Console::new(Cursor::new(input.to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("a b\n\n  c\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("a"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("b"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("c"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn difficulty_reprompts_after_invalid_choice() {
        let mut c = console("4\n2\n");
        assert_eq!(c.read_difficulty().unwrap(), DifficultyTier::Medium);
        assert_eq!(DifficultyTier::Medium.limits().max_number, 100);

        let text = output(c);
        assert_eq!(text.matches("Choose a difficulty:").count(), 2);
        assert_eq!(text.matches("Invalid difficulty!").count(), 1);
    }

    #[test]
    fn difficulty_rejects_non_numeric() {
        let mut c = console("medium-ish\n3\n");
        assert_eq!(c.read_difficulty().unwrap(), DifficultyTier::Hard);
    }

    #[test]
    fn malformed_guess_does_not_advance() {
        let mut c = console("abc\n42\n");
        assert_eq!(c.read_guess(1, 10).unwrap(), 42);

        let text = output(c);
        // Prompted twice for the same attempt
        assert_eq!(text.matches("Attempt 1/10:").count(), 2);
        assert_eq!(text.matches("enter a whole NUMBER").count(), 1);
    }

    #[test]
    fn each_retry_discards_one_token() {
        let mut c = console("x y 7\n");
        assert_eq!(c.read_guess(3, 5).unwrap(), 7);
        assert_eq!(output(c).matches("enter a whole NUMBER").count(), 2);
    }

    #[test]
    fn non_utf8_guess_costs_one_retry() {
        let mut c = console_bytes(b"\xff\n42\n");
        assert_eq!(c.read_guess(1, 5).unwrap(), 42);

        let text = output(c);
        assert_eq!(text.matches("Attempt 1/5:").count(), 2);
        assert_eq!(text.matches("enter a whole NUMBER").count(), 1);
    }

    #[test]
    fn non_utf8_difficulty_is_rejected() {
        let mut c = console_bytes(b"\xfe\xff 2\n");
        assert_eq!(c.read_difficulty().unwrap(), DifficultyTier::Medium);
        assert_eq!(output(c).matches("Invalid difficulty!").count(), 1);
    }

    #[test]
    fn replay_accepts_only_y() {
        assert!(console("y\n").confirm_replay().unwrap());
        assert!(console("Y\n").confirm_replay().unwrap());
        assert!(!console("n\n").confirm_replay().unwrap());
        assert!(!console("yes\n").confirm_replay().unwrap());
    }

    #[test]
    fn closed_input_is_reported() {
        assert!(matches!(
            console("").read_guess(1, 5),
            Err(ConsoleError::Closed)
        ));
        assert!(matches!(
            console("oops\n").read_difficulty(),
            Err(ConsoleError::Closed)
        ));
        assert!(matches!(
            console("").confirm_replay(),
            Err(ConsoleError::Closed)
        ));
    }
}
