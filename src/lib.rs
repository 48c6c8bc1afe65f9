//! shelfmark - interactive library catalog
//!
//! A single-session, in-memory catalog of books and magazines driven by a
//! five-option text menu, with a write-only flat-file export.
//!
//! # Modules
//!
//! - `library`: Data structures (Item, ItemKind, Catalog) and export
//! - `session`: The interactive menu loop and token input
//! - `cli`: Command-line entrypoint
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive menu
//! shelfmark
//!
//! # Raise log verbosity
//! RUST_LOG=debug shelfmark
//! ```

pub mod cli;
pub mod library;
pub mod session;

// Re-export main types at crate root for convenience
pub use library::{Catalog, ExportError, Item, ItemKind};
pub use session::{InputError, Session, SessionError, TokenReader};
