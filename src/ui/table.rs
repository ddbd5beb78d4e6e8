use crate::storage::DbStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Table")]
    pub table: String,
    #[tabled(rename = "Rows")]
    pub rows: String,
}

/// Render records as a rounded table; empty input renders as an empty string
pub fn records_table<T: Tabled>(records: &[T]) -> String {
    if records.is_empty() {
        return String::new();
    }
    Table::new(records).with(Style::rounded()).to_string()
}

pub fn stats_table(stats: &DbStats) -> String {
    let rows = vec![
        TableRow {
            table: "autors".to_string(),
            rows: stats.authors.to_string(),
        },
        TableRow {
            table: "books".to_string(),
            rows: stats.books.to_string(),
        },
    ];
    records_table(&rows)
}
