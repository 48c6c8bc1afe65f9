//! Interactive menu session.
//!
//! Drives the five-option menu loop: each iteration shows the menu, reads
//! one command, performs one catalog operation, and reports any error
//! before looping. The session owns its catalog for its whole lifetime and
//! only option 5 (or end of input) ends it.
//!
//! The session is generic over its reader and output/error sinks so the
//! full loop can be driven by in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::library::{Catalog, ExportError, Item};

pub mod input;

pub use input::{InputError, TokenReader};

/// The fixed menu block shown before every command
const MENU: &str = "Library System\n\
                    1. Add Book\n\
                    2. Add Magazine\n\
                    3. Display Items\n\
                    4. Save to File\n\
                    5. Exit\n\
                    Choose an option: ";

const INVALID_OPTION: &str = "Invalid option. Please try again.";

/// Fatal session errors.
///
/// Operation-level failures (bad input, export errors) are reported to the
/// error sink and swallowed; only sink I/O failure aborts the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Writing to the output or error sink failed
    #[error("Failed to write session output: {0}")]
    Io(#[from] io::Error),
}

/// Errors from a single menu operation, caught at the loop body
#[derive(Debug, Error)]
enum OpError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    AddBook,
    AddMagazine,
    DisplayItems,
    SaveToFile,
    Exit,
}

impl Command {
    /// Map a menu choice to a command
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Command::AddBook),
            2 => Some(Command::AddMagazine),
            3 => Some(Command::DisplayItems),
            4 => Some(Command::SaveToFile),
            5 => Some(Command::Exit),
            _ => None,
        }
    }
}

/// One interactive run of the menu loop
pub struct Session<R, O, E> {
    input: TokenReader<R>,
    out: O,
    err: E,
    catalog: Catalog,
}

impl<R: BufRead, O: Write, E: Write> Session<R, O, E> {
    /// Create a session with an empty catalog
    pub fn new(reader: R, out: O, err: E) -> Self {
        Self {
            input: TokenReader::new(reader),
            out,
            err,
            catalog: Catalog::new(),
        }
    }

    /// The catalog owned by this session
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until exit or end of input
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let choice = match self.input.next_int() {
                Ok(choice) => choice,
                Err(InputError::Eof) => {
                    tracing::debug!("Input exhausted, ending session");
                    break;
                }
                Err(InputError::Parse { .. }) => {
                    writeln!(self.out, "{}", INVALID_OPTION)?;
                    continue;
                }
                Err(InputError::Io(e)) => return Err(SessionError::Io(e)),
            };

            let command = match Command::from_choice(choice) {
                Some(command) => command,
                None => {
                    writeln!(self.out, "{}", INVALID_OPTION)?;
                    continue;
                }
            };

            let result = match command {
                Command::AddBook => self.add_book(),
                Command::AddMagazine => self.add_magazine(),
                Command::DisplayItems => self.display_items(),
                Command::SaveToFile => self.save_to_file(),
                Command::Exit => break,
            };

            match result {
                Ok(()) => {}
                Err(OpError::Input(InputError::Eof)) => {
                    tracing::debug!("Input exhausted mid-command, ending session");
                    break;
                }
                Err(OpError::Input(InputError::Io(e))) => return Err(SessionError::Io(e)),
                Err(OpError::Io(e)) => return Err(SessionError::Io(e)),
                Err(e) => {
                    writeln!(self.err, "Error: {}", e)?;
                }
            }
        }

        Ok(())
    }

    /// Prompt for and add a book
    fn add_book(&mut self) -> Result<(), OpError> {
        self.prompt("Enter Book ID, Title, and Author: ")?;

        let id = self.input.next_int()?;
        let title = self.input.next_token()?;
        let author = self.input.next_token()?;

        self.catalog.add(Item::book(id, title, author));
        Ok(())
    }

    /// Prompt for and add a magazine
    fn add_magazine(&mut self) -> Result<(), OpError> {
        self.prompt("Enter Magazine ID, Title, and Issue Number: ")?;

        let id = self.input.next_int()?;
        let title = self.input.next_token()?;
        let issue_number = self.input.next_int()?;

        self.catalog.add(Item::magazine(id, title, issue_number));
        Ok(())
    }

    /// Print every item in insertion order
    fn display_items(&mut self) -> Result<(), OpError> {
        self.catalog.display(&mut self.out)?;
        Ok(())
    }

    /// Prompt for a filename and export the catalog
    fn save_to_file(&mut self) -> Result<(), OpError> {
        self.prompt("Enter filename to save: ")?;

        let filename = self.input.next_token()?;
        self.catalog.save_to_file(&filename)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), OpError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
