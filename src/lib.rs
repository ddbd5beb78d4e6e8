//! # Bookshelf - SQLite data access for authors and books
//!
//! Bookshelf provides:
//! - A `Store` owning one SQLite connection with the `autors` and `books` tables
//! - Generic select/update/delete operations driven by ordered filters
//! - Table and column identifiers as types, so no caller string reaches SQL
//! - A fixed sample dataset and demonstration run

pub mod value;
pub mod table;
pub mod filter;
pub mod model;
pub mod storage;
pub mod seed;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use value::Value;
pub use table::{AuthorColumn, Authors, BookColumn, Books, Table, TableKind};
pub use filter::{Assignments, Filter, Op};
pub use model::{Author, Book, NewAuthor, NewBook};
pub use storage::Store;

/// Result type alias for Bookshelf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Bookshelf operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open database {}: {source}", .path.display())]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Empty filter on {0}: at least one condition is required")]
    EmptyFilter(&'static str),

    #[error("Nothing to update in {0}")]
    EmptyUpdate(&'static str),

    #[error("No row with id {id} in {table}")]
    NotFound { table: &'static str, id: i64 },

    #[error("Unknown table: {0} (expected autors or books)")]
    UnknownTable(String),
}
