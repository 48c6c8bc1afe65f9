//! Command-line interface for shelfmark.
//!
//! The real surface is the interactive menu itself; clap only contributes
//! the standard `--help`/`--version` plumbing and wires the session to the
//! process streams.

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::session::Session;

/// shelfmark - interactive library catalog
#[derive(Parser, Debug)]
#[command(name = "shelfmark")]
#[command(version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Run the interactive session over stdin/stdout/stderr
    pub fn execute(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();

        let mut session = Session::new(stdin.lock(), stdout.lock(), stderr.lock());
        session.run()?;

        Ok(())
    }
}
