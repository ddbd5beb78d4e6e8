//! Author and book records

use serde::Serialize;
use tabled::Tabled;

/// A row of the `autors` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct Author {
    #[tabled(rename = "Id")]
    pub id: i64,
    #[tabled(rename = "First name")]
    pub first_name: String,
    #[tabled(rename = "Last name")]
    pub last_name: String,
}

/// A row of the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct Book {
    #[tabled(rename = "Id")]
    pub id: i64,
    #[tabled(rename = "Author")]
    pub author_id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Genre")]
    pub genre: String,
    #[tabled(rename = "Year")]
    pub release_year: i32,
}

/// Author to insert; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuthor {
    pub first_name: String,
    pub last_name: String,
}

impl NewAuthor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Book to insert; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub author_id: i64,
    pub title: String,
    pub genre: String,
    pub release_year: i32,
}

impl NewBook {
    pub fn new(
        author_id: i64,
        title: impl Into<String>,
        genre: impl Into<String>,
        release_year: i32,
    ) -> Self {
        Self {
            author_id,
            title: title.into(),
            genre: genre.into(),
            release_year,
        }
    }
}
