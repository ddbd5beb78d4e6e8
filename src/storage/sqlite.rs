//! SQLite storage implementation

use std::path::Path;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use tracing::{debug, error, info};
use crate::{Result, Error};
use crate::filter::{Assignments, Filter};
use crate::model::{NewAuthor, NewBook};
use crate::table::{Authors, Books, Table};
use crate::value::Value;
use super::schema;

/// SQLite-backed storage for authors and books
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| {
            error!("Failed to open database {}: {}", path.display(), source);
            Error::Open { path: path.to_path_buf(), source }
        })?;
        debug!("Opened database {}", path.display());
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Close the connection, reporting any error SQLite raises while doing so
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| {
            error!("Failed to close database: {}", e);
            Error::Storage(e)
        })
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Run a single statement without parameters
    pub fn execute(&self, sql: &str) -> Result<()> {
        debug!("Executing: {}", sql.trim());
        self.conn.execute(sql, []).map_err(|e| {
            error!("Statement failed: {}", e);
            Error::Storage(e)
        })?;
        Ok(())
    }

    /// Turn foreign key enforcement on or off for this connection
    pub fn set_foreign_keys(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "ON" } else { "OFF" };
        self.conn.execute_batch(&format!("PRAGMA foreign_keys = {};", value))?;
        Ok(())
    }

    pub fn foreign_keys_enabled(&self) -> Result<bool> {
        let enabled: bool = self.conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
        Ok(enabled)
    }

    // ========== Insert Operations ==========

    /// Insert an author and return its id
    pub fn insert_author(&self, author: &NewAuthor) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO autors (first_name, last_name) VALUES (?1, ?2)",
            params![author.first_name, author.last_name],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted author {} {} as {}", author.first_name, author.last_name, id);
        Ok(id)
    }

    /// Insert a book and return its id
    pub fn insert_book(&self, book: &NewBook) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO books (autor_id, title, genre, release_date_pl)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![book.author_id, book.title, book.genre, book.release_year],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted book {:?} as {}", book.title, id);
        Ok(id)
    }

    // ========== Generic Operations ==========

    /// Every row of the table, in id order
    pub fn select_all<T: Table>(&self) -> Result<Vec<T::Record>> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", T::select_list(), T::NAME);
        self.query::<T>(&sql, &[])
    }

    /// Rows matching every condition of the filter
    pub fn select_where<T: Table>(&self, filter: &Filter<T::Column>) -> Result<Vec<T::Record>> {
        let clause = filter.to_clause().ok_or(Error::EmptyFilter(T::NAME))?;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY id",
            T::select_list(),
            T::NAME,
            clause.sql
        );
        self.query::<T>(&sql, &clause.params)
    }

    /// Get a row by id
    pub fn get<T: Table>(&self, id: i64) -> Result<Option<T::Record>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?1", T::select_list(), T::NAME);
        self.conn
            .query_row(&sql, [id], |row| T::from_row(row))
            .optional()
            .map_err(Into::into)
    }

    /// Update the row with the given id
    pub fn update<T: Table>(&self, id: i64, fields: &Assignments<T::Column>) -> Result<()> {
        let set = fields.to_clause().ok_or(Error::EmptyUpdate(T::NAME))?;
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::NAME, set.sql);

        let mut values = set.params;
        values.push(Value::Integer(id));

        if self.run(&sql, &values)? == 0 {
            return Err(Error::NotFound { table: T::NAME, id });
        }
        info!("Updated {} id {}", T::NAME, id);
        Ok(())
    }

    /// Delete every row of the table, returning the number removed
    pub fn delete_all<T: Table>(&self) -> Result<usize> {
        let deleted = self.run(&format!("DELETE FROM {}", T::NAME), &[])?;
        info!("Deleted {} rows from {}", deleted, T::NAME);
        Ok(deleted)
    }

    /// Delete rows matching the filter, returning the number removed
    pub fn delete_where<T: Table>(&self, filter: &Filter<T::Column>) -> Result<usize> {
        let clause = filter.to_clause().ok_or(Error::EmptyFilter(T::NAME))?;
        let sql = format!("DELETE FROM {} WHERE {}", T::NAME, clause.sql);
        let deleted = self.run(&sql, &clause.params)?;
        info!("Deleted {} rows from {}", deleted, T::NAME);
        Ok(deleted)
    }

    /// Count all rows of the table
    pub fn count<T: Table>(&self) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::NAME);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn query<T: Table>(&self, sql: &str, values: &[Value]) -> Result<Vec<T::Record>> {
        debug!("Query: {} {:?}", sql, values);
        let mut stmt = self.conn.prepare(sql)?;
        let records = stmt
            .query_map(params_from_iter(values), |row| T::from_row(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    fn run(&self, sql: &str, values: &[Value]) -> Result<usize> {
        debug!("Execute: {} {:?}", sql, values);
        self.conn.execute(sql, params_from_iter(values)).map_err(|e| {
            error!("Statement failed: {}", e);
            Error::Storage(e)
        })
    }

    // ========== Bulk Operations ==========

    /// Begin a transaction for bulk operations
    pub fn begin_transaction(&mut self) -> Result<()> {
        self.conn.execute("BEGIN TRANSACTION", [])?;
        Ok(())
    }

    /// Commit a transaction
    pub fn commit(&mut self) -> Result<()> {
        self.conn.execute("COMMIT", [])?;
        Ok(())
    }

    /// Rollback a transaction
    pub fn rollback(&mut self) -> Result<()> {
        self.conn.execute("ROLLBACK", [])?;
        Ok(())
    }

    pub fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            authors: self.count::<Authors>()?,
            books: self.count::<Books>()?,
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub authors: usize,
    pub books: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Authors: {}", self.authors)?;
        writeln!(f, "  Books: {}", self.books)
    }
}
