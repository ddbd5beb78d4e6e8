//! Bookshelf CLI - populate and query the authors/books database

use bookshelf::config::{self, BookshelfConfig};
use bookshelf::seed;
use bookshelf::storage::Store;
use bookshelf::ui::{self, Icons};
use bookshelf::{Authors, Books, TableKind};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "SQLite data access for authors and books")]
#[command(long_about = r#"
Bookshelf keeps authors and their books in a local SQLite file.

Without a subcommand it runs the demonstration: create the tables, seed four
authors and nine books, then query, update and delete a few rows.

Example usage:
  bookshelf
  bookshelf list books --json
  bookshelf stats --database ./data/books.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the sample data and run the demonstration queries
    Demo {
        /// Delete all books and authors first
        #[arg(long)]
        reset: bool,
    },

    /// Create the tables and write a config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Print every row of a table
    List {
        /// Table name (autors or books)
        table: TableKind,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show row counts
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        ui::error(&e.to_string());
        return Err(e);
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let loaded = config::load_config(Some(&config_path))?;
    let database = config::resolve_database_path(cli.database.as_deref(), loaded.as_ref());

    match cli.command.unwrap_or(Commands::Demo { reset: false }) {
        Commands::Demo { reset } => {
            let mut store = open_store(&database, loaded.as_ref())?;
            if reset {
                seed::reset(&store)?;
                ui::warn("Cleared all books and authors");
            }

            ui::header("Bookshelf demo");
            ui::info(Icons::DATABASE, "Database", &database.display().to_string());

            let report = seed::run_demo(&mut store)?;
            ui::summary_row("Authors seeded:", &report.seeded.author_ids.len().to_string());
            ui::summary_row("Books seeded:", &report.seeded.book_ids.len().to_string());

            ui::section(&format!("{} Books by author {}", Icons::SEARCH, report.seeded.author_ids[1]));
            println!("{}", ui::records_table(&report.books_by_second_author));

            ui::section(&format!("{} All authors", Icons::PERSON));
            println!("{}", ui::records_table(&report.all_authors));

            ui::section(&format!("{} Updated author", Icons::MOD));
            println!("{}", ui::records_table(&report.updated_author));

            ui::section(&format!("{} Delete", Icons::DEL));
            ui::summary_row("Books deleted:", &report.deleted_books.to_string());

            store.close()?;
            println!();
            ui::success("Done");
        }

        Commands::Init { force } => {
            let store = open_store(&database, loaded.as_ref())?;
            store.close()?;

            let config = BookshelfConfig {
                database: Some(database.display().to_string()),
                foreign_keys: loaded.as_ref().and_then(|c| c.foreign_keys),
            };
            config::write_config(&config_path, &config, force)?;
            ui::success(&format!("Initialized {}", database.display()));
            ui::info(Icons::INFO, "Config", &config_path.display().to_string());
        }

        Commands::List { table, json } => {
            let store = open_store(&database, loaded.as_ref())?;
            let rendered = match (table, json) {
                (TableKind::Authors, true) => serde_json::to_string_pretty(&store.select_all::<Authors>()?)?,
                (TableKind::Books, true) => serde_json::to_string_pretty(&store.select_all::<Books>()?)?,
                (TableKind::Authors, false) => ui::records_table(&store.select_all::<Authors>()?),
                (TableKind::Books, false) => ui::records_table(&store.select_all::<Books>()?),
            };

            if rendered.is_empty() {
                ui::warn(&format!("{} is empty", table));
            } else {
                println!("{}", rendered);
            }
            store.close()?;
        }

        Commands::Stats => {
            let store = open_store(&database, loaded.as_ref())?;
            let stats = store.stats()?;

            println!("{} Bookshelf Statistics ({})", Icons::STATS, database.display());
            println!("{}", ui::stats_table(&stats));
            store.close()?;
        }
    }

    Ok(())
}

fn open_store(database: &Path, config: Option<&BookshelfConfig>) -> anyhow::Result<Store> {
    config::ensure_db_dir(database)?;
    let store = Store::open(database)?;
    if let Some(enabled) = config.and_then(|c| c.foreign_keys) {
        store.set_foreign_keys(enabled)?;
    }
    tracing::debug!("Using database {}", database.display());
    Ok(store)
}
