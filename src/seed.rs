//! Fixed sample dataset and the demonstration run over it

use crate::filter::{Assignments, Filter};
use crate::model::{Author, Book, NewAuthor, NewBook};
use crate::storage::Store;
use crate::table::{AuthorColumn, Authors, BookColumn, Books};
use crate::Result;
use tracing::{info, warn};

pub struct SeedAuthor {
    pub first_name: &'static str,
    pub last_name: &'static str,
    /// (title, genre, release year)
    pub books: &'static [(&'static str, &'static str, i32)],
}

pub const DATASET: &[SeedAuthor] = &[
    SeedAuthor {
        first_name: "Stieg",
        last_name: "Larsson",
        books: &[
            ("Mężczyźni, którzy nienawidzą kobiet", "kryminał", 2008),
            ("Dziewczyna, która igrała z ogniem", "kryminał", 2009),
            ("Zamek z piasku, który runął", "kryminał", 2008),
        ],
    },
    SeedAuthor {
        first_name: "Jo",
        last_name: "Nesbo",
        books: &[
            ("Pierwszy śnieg", "kryminał", 2007),
            ("Czerwone gardło", "kryminał", 2006),
            ("Upiory", "kryminał", 2012),
        ],
    },
    SeedAuthor {
        first_name: "Douglas",
        last_name: "Adams",
        books: &[("Autostopem przez galaktykę", "komedia", 1979)],
    },
    SeedAuthor {
        first_name: "Neil",
        last_name: "Gaiman",
        books: &[
            ("Amerykańscy bogowie", "fantasy", 2002),
            ("Koralina", "fantasy", 2003),
        ],
    },
];

/// Ids assigned while seeding, in dataset order
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    pub author_ids: Vec<i64>,
    pub book_ids: Vec<i64>,
}

/// Insert the whole dataset in one transaction
pub fn seed(store: &mut Store) -> Result<SeedReport> {
    store.begin_transaction()?;
    match insert_dataset(store) {
        Ok(report) => {
            store.commit()?;
            info!(
                "Seeded {} authors and {} books",
                report.author_ids.len(),
                report.book_ids.len()
            );
            Ok(report)
        }
        Err(e) => {
            warn!("Seeding failed, rolling back: {}", e);
            store.rollback()?;
            Err(e)
        }
    }
}

fn insert_dataset(store: &Store) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    for author in DATASET {
        let author_id = store.insert_author(&NewAuthor::new(author.first_name, author.last_name))?;
        report.author_ids.push(author_id);
        for &(title, genre, year) in author.books {
            report.book_ids.push(store.insert_book(&NewBook::new(author_id, title, genre, year))?);
        }
    }
    Ok(report)
}

/// Results of each step of the demonstration
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub seeded: SeedReport,
    pub books_by_second_author: Vec<Book>,
    pub all_authors: Vec<Author>,
    pub updated_author: Vec<Author>,
    pub deleted_books: usize,
}

/// Seed, then query, update and delete against the freshly seeded rows
///
/// The second author, fourth author and ninth book are addressed by the ids
/// this run assigned, so repeated runs against the same file stay consistent.
pub fn run_demo(store: &mut Store) -> Result<DemoReport> {
    let seeded = seed(store)?;

    let second_author = seeded.author_ids[1];
    let books_by_second_author =
        store.select_where::<Books>(&Filter::new().eq(BookColumn::AuthorId, second_author))?;

    let all_authors = store.select_all::<Authors>()?;

    let fourth_author = seeded.author_ids[3];
    store.update::<Authors>(
        fourth_author,
        &Assignments::new().set(AuthorColumn::FirstName, "Neil Richard"),
    )?;
    let updated_author =
        store.select_where::<Authors>(&Filter::new().eq(AuthorColumn::Id, fourth_author))?;

    let ninth_book = seeded.book_ids[8];
    let deleted_books = store.delete_where::<Books>(&Filter::new().eq(BookColumn::Id, ninth_book))?;

    Ok(DemoReport {
        seeded,
        books_by_second_author,
        all_authors,
        updated_author,
        deleted_books,
    })
}

/// Remove every book and author
pub fn reset(store: &Store) -> Result<()> {
    // books first, in case foreign keys are enforced
    store.delete_all::<Books>()?;
    store.delete_all::<Authors>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        assert_eq!(DATASET.len(), 4);
        assert_eq!(DATASET.iter().map(|a| a.books.len()).sum::<usize>(), 9);
    }

    #[test]
    fn test_seed_counts() {
        let mut store = Store::open_in_memory().unwrap();
        let report = seed(&mut store).unwrap();

        assert_eq!(report.author_ids.len(), 4);
        assert_eq!(report.book_ids.len(), 9);
        assert_eq!(store.count::<Authors>().unwrap(), 4);
        assert_eq!(store.count::<Books>().unwrap(), 9);

        let second = store
            .select_where::<Books>(&Filter::new().eq(BookColumn::AuthorId, report.author_ids[1]))
            .unwrap();
        assert_eq!(second.len(), 3);
        assert!(!store.in_transaction());
    }

    #[test]
    fn test_demo_on_fresh_database() {
        let mut store = Store::open_in_memory().unwrap();
        let report = run_demo(&mut store).unwrap();

        assert_eq!(report.books_by_second_author.len(), 3);
        assert!(report.books_by_second_author.iter().all(|b| b.author_id == 2));
        assert_eq!(report.all_authors.len(), 4);

        assert_eq!(report.updated_author.len(), 1);
        assert_eq!(report.updated_author[0].id, 4);
        assert_eq!(report.updated_author[0].first_name, "Neil Richard");
        assert_eq!(report.updated_author[0].last_name, "Gaiman");

        assert_eq!(report.deleted_books, 1);
        let ninth = store
            .select_where::<Books>(&Filter::new().eq(BookColumn::Id, 9))
            .unwrap();
        assert!(ninth.is_empty());
        assert_eq!(store.count::<Books>().unwrap(), 8);
    }

    #[test]
    fn test_demo_twice_then_reset() {
        let mut store = Store::open_in_memory().unwrap();
        run_demo(&mut store).unwrap();
        let second = run_demo(&mut store).unwrap();

        assert_eq!(second.all_authors.len(), 8);
        assert_eq!(second.deleted_books, 1);
        assert_eq!(store.count::<Books>().unwrap(), 16);

        reset(&store).unwrap();
        assert_eq!(store.stats().unwrap().authors, 0);
        assert_eq!(store.stats().unwrap().books, 0);
    }

    #[test]
    fn test_seed_rolls_back_on_failure() {
        let mut store = Store::open_in_memory().unwrap();
        store.execute("DROP TABLE books").unwrap();

        assert!(seed(&mut store).is_err());
        assert!(!store.in_transaction());
        assert_eq!(store.count::<Authors>().unwrap(), 0);
    }
}
