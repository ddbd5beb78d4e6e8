//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - autors(id, first_name, last_name)
//! - books(id, autor_id, title, genre, release_date_pl)

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, Store};
