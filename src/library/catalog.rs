//! Catalog of library items.
//!
//! An ordered, exclusively-owning collection with display and a write-only
//! flat-file export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::item::Item;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not open {} for writing: {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("Could not write to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// In-memory catalog of items, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item; insertion order is the display and export order
    pub fn add(&mut self, item: Item) {
        tracing::debug!("Added {} '{}' to catalog", item.kind(), item.title());
        self.items.push(item);
    }

    /// All items, in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write one line per item to `out`, in insertion order.
    ///
    /// An empty catalog writes nothing.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", item)?;
        }
        Ok(())
    }

    /// Export the catalog to `path`, truncating any existing file.
    ///
    /// One line per item: `<id>,<kind>,` with a trailing comma before the
    /// terminator. The format has no reader; it is export-only.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|source| ExportError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut out = BufWriter::new(file);
        for item in &self.items {
            writeln!(out, "{},{},", item.id(), item.kind()).map_err(|source| {
                ExportError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }
        out.flush().map_err(|source| ExportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Exported {} items to {}", self.items.len(), path.display());
        Ok(())
    }
}
