//! In-memory library catalog.
//!
//! One `Catalog` per session holds `Item` records (books and magazines) in
//! insertion order. The only persistence is a write-only flat-file export
//! of `<id>,<kind>,` lines.

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, ExportError};
pub use item::{Item, ItemKind};
