//! Database schema definitions

/// SQL to create the authors table
pub const CREATE_AUTHORS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS autors (
    id INTEGER PRIMARY KEY,
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL
)
"#;

/// SQL to create the books table
/// `autor_id` is only enforced when `PRAGMA foreign_keys` is on
pub const CREATE_BOOKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY,
    autor_id INTEGER NOT NULL,
    title VARCHAR(100) NOT NULL,
    genre VARCHAR(20) NOT NULL,
    release_date_pl YEAR NOT NULL,
    FOREIGN KEY (autor_id) REFERENCES autors (id)
)
"#;

/// All schema creation statements, parents first
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_AUTHORS_TABLE, CREATE_BOOKS_TABLE]
}
