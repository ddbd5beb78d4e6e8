//! Table and column identifiers
//!
//! Table names and column names never come from callers as raw strings.
//! Each table is a marker type implementing [`Table`], and its columns are
//! an enum, so every identifier that reaches SQL text is a compile-time
//! constant.

use crate::model::{Author, Book};
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A column of some table
pub trait Column: Copy + fmt::Debug {
    /// Column name as it appears in SQL
    fn name(self) -> &'static str;
}

/// A table the store knows how to query
pub trait Table {
    /// Table name as it appears in SQL
    const NAME: &'static str;

    /// Columns in declaration order, used as the SELECT list
    const COLUMNS: &'static [&'static str];

    type Column: Column;
    type Record;

    /// Map a row selected with [`Table::COLUMNS`] to a record
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self::Record>;

    /// The SELECT list for this table
    fn select_list() -> String {
        Self::COLUMNS.join(", ")
    }
}

/// The `autors` table
#[derive(Debug, Clone, Copy)]
pub struct Authors;

/// The `books` table
#[derive(Debug, Clone, Copy)]
pub struct Books;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorColumn {
    Id,
    FirstName,
    LastName,
}

impl Column for AuthorColumn {
    fn name(self) -> &'static str {
        match self {
            AuthorColumn::Id => "id",
            AuthorColumn::FirstName => "first_name",
            AuthorColumn::LastName => "last_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookColumn {
    Id,
    AuthorId,
    Title,
    Genre,
    ReleaseYear,
}

impl Column for BookColumn {
    fn name(self) -> &'static str {
        match self {
            BookColumn::Id => "id",
            BookColumn::AuthorId => "autor_id",
            BookColumn::Title => "title",
            BookColumn::Genre => "genre",
            BookColumn::ReleaseYear => "release_date_pl",
        }
    }
}

impl Table for Authors {
    const NAME: &'static str = "autors";
    const COLUMNS: &'static [&'static str] = &["id", "first_name", "last_name"];

    type Column = AuthorColumn;
    type Record = Author;

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Author> {
        Ok(Author {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
        })
    }
}

impl Table for Books {
    const NAME: &'static str = "books";
    const COLUMNS: &'static [&'static str] =
        &["id", "autor_id", "title", "genre", "release_date_pl"];

    type Column = BookColumn;
    type Record = Book;

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Book> {
        Ok(Book {
            id: row.get(0)?,
            author_id: row.get(1)?,
            title: row.get(2)?,
            genre: row.get(3)?,
            release_year: row.get(4)?,
        })
    }
}

/// Runtime table selector, for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Authors,
    Books,
}

impl TableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Authors => Authors::NAME,
            TableKind::Books => Books::NAME,
        }
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "autors" | "authors" => Ok(TableKind::Authors),
            "books" => Ok(TableKind::Books),
            _ => Err(Error::UnknownTable(s.to_string())),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_match_select_list() {
        let names: Vec<_> = [
            AuthorColumn::Id,
            AuthorColumn::FirstName,
            AuthorColumn::LastName,
        ]
        .iter()
        .map(|c| c.name())
        .collect();
        assert_eq!(names, Authors::COLUMNS);

        let names: Vec<_> = [
            BookColumn::Id,
            BookColumn::AuthorId,
            BookColumn::Title,
            BookColumn::Genre,
            BookColumn::ReleaseYear,
        ]
        .iter()
        .map(|c| c.name())
        .collect();
        assert_eq!(names, Books::COLUMNS);
    }

    #[test]
    fn test_table_kind_parse() {
        assert_eq!("autors".parse::<TableKind>().unwrap(), TableKind::Authors);
        assert_eq!("authors".parse::<TableKind>().unwrap(), TableKind::Authors);
        assert_eq!("books".parse::<TableKind>().unwrap(), TableKind::Books);
        assert!(matches!(
            "books; DROP TABLE autors".parse::<TableKind>(),
            Err(Error::UnknownTable(_))
        ));
    }
}
