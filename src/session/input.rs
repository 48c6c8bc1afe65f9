//! Token input for the interactive session.
//!
//! Reads whitespace-delimited tokens the way console scanners do: tokens
//! come from the current line first, and a fresh line is read only when the
//! line is exhausted. A malformed integer discards the rest of its line so
//! the next command starts clean instead of re-reading stale tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

/// Errors raised while reading interactive input
#[derive(Debug, Error)]
pub enum InputError {
    /// A token that should have been an integer was not
    #[error("Expected a number, got '{input}'")]
    Parse { input: String },

    /// The input source is exhausted
    #[error("End of input")]
    Eof,

    /// The underlying reader failed
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Whitespace-delimited token reader over buffered input
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Create a token reader over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Get the next token, reading further lines as needed.
    ///
    /// Blank lines are skipped. Returns `InputError::Eof` once the reader
    /// has nothing more to give.
    pub fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            if !self.read_line()? {
                return Err(InputError::Eof);
            }
        }
    }

    /// Get the next token parsed as an integer.
    ///
    /// On parse failure the remaining tokens of the current line are
    /// discarded, resynchronizing the reader for the next command.
    pub fn next_int(&mut self) -> Result<i64, InputError> {
        let token = self.next_token()?;
        match token.parse() {
            Ok(n) => Ok(n),
            Err(_) => {
                self.pending.clear();
                Err(InputError::Parse { input: token })
            }
        }
    }

    /// Read one more line into the token queue; false on end of input.
    fn read_line(&mut self) -> Result<bool, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        self.pending
            .extend(line.split_whitespace().map(str::to_string));
        Ok(true)
    }
}
