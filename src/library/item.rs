//! Catalog item variants.
//!
//! An item is one catalog record: a book or a magazine. Fields are fixed at
//! construction and never validated; duplicate ids are allowed.

use std::fmt;

/// Kind of catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A book with a single author
    Book,

    /// A magazine issue
    Magazine,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Book => write!(f, "book"),
            ItemKind::Magazine => write!(f, "magazine"),
        }
    }
}

/// One catalog record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Book with a title and author
    Book {
        id: i64,
        title: String,
        author: String,
    },

    /// Magazine with a title and issue number
    Magazine {
        id: i64,
        title: String,
        issue_number: i64,
    },
}

impl Item {
    /// Create a book record
    pub fn book(id: i64, title: impl Into<String>, author: impl Into<String>) -> Self {
        Item::Book {
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    /// Create a magazine record
    pub fn magazine(id: i64, title: impl Into<String>, issue_number: i64) -> Self {
        Item::Magazine {
            id,
            title: title.into(),
            issue_number,
        }
    }

    /// Get the caller-supplied id (not checked for uniqueness)
    pub fn id(&self) -> i64 {
        match self {
            Item::Book { id, .. } | Item::Magazine { id, .. } => *id,
        }
    }

    /// Get the title
    pub fn title(&self) -> &str {
        match self {
            Item::Book { title, .. } | Item::Magazine { title, .. } => title,
        }
    }

    /// Stable kind tag, used in the export format
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Book { .. } => ItemKind::Book,
            Item::Magazine { .. } => ItemKind::Magazine,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Book { id, title, author } => {
                write!(f, "book id: {}, title: {}, author: {}", id, title, author)
            }
            Item::Magazine {
                id,
                title,
                issue_number,
            } => {
                write!(
                    f,
                    "magazine id: {}, title: {}, issue number: {}",
                    id, title, issue_number
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_stable() {
        assert_eq!(ItemKind::Book.to_string(), "book");
        assert_eq!(ItemKind::Magazine.to_string(), "magazine");
    }

    #[test]
    fn test_book_display_line() {
        let book = Item::book(1, "Dune", "Herbert");

        let line = book.to_string();
        assert!(line.contains("1"));
        assert!(line.contains("Dune"));
        assert!(line.contains("Herbert"));
        assert_eq!(line, "book id: 1, title: Dune, author: Herbert");
    }

    #[test]
    fn test_magazine_display_line() {
        let magazine = Item::magazine(2, "Wired", 42);

        let line = magazine.to_string();
        assert!(line.contains("2"));
        assert!(line.contains("Wired"));
        assert!(line.contains("42"));
        assert_eq!(line, "magazine id: 2, title: Wired, issue number: 42");
    }

    #[test]
    fn test_item_accessors() {
        let book = Item::book(7, "Dune", "Herbert");
        assert_eq!(book.id(), 7);
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.kind(), ItemKind::Book);

        let magazine = Item::magazine(-3, "Wired", 42);
        assert_eq!(magazine.id(), -3);
        assert_eq!(magazine.kind(), ItemKind::Magazine);
    }
}
