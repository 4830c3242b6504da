//! Sample catalogue used by the `seed` binary. Re-running it adds nothing that is already there.

use crate::error::StoreError;
use crate::model::{AuthorInput, BookInput};
use crate::store::Store;

struct SampleAuthor {
    name: &'static str,
    bio: &'static str,
    books: &'static [(&'static str, &'static str, i32)],
}

const SAMPLES: &[SampleAuthor] = &[
    SampleAuthor {
        name: "George Orwell",
        bio: "Author of 1984 and Animal Farm",
        books: &[
            ("1984", "Dystopian novel", 1949),
            ("Animal Farm", "Political satire", 1945),
        ],
    },
    SampleAuthor {
        name: "Jane Austen",
        bio: "Author of Pride and Prejudice",
        books: &[("Pride and Prejudice", "Romantic novel", 1813)],
    },
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub authors_created: usize,
    pub books_created: usize,
}

/// Authors are matched by name, books by title and author.
pub async fn seed_catalogue(store: &dyn Store) -> Result<SeedReport, StoreError> {
    let mut report = SeedReport::default();
    let mut authors = store.list_authors().await?;
    let books = store.list_books().await?;

    for sample in SAMPLES {
        let author_id = match authors.iter().find(|a| a.name == sample.name) {
            Some(a) => a.id,
            None => {
                let created = store
                    .create_author(&AuthorInput {
                        name: sample.name.into(),
                        bio: Some(sample.bio.into()),
                    })
                    .await?;
                report.authors_created += 1;
                let id = created.id;
                authors.push(created);
                id
            }
        };

        for (title, description, year) in sample.books {
            if books.iter().any(|b| b.author_id == author_id && b.title == *title) {
                continue;
            }
            store
                .create_book(&BookInput {
                    title: (*title).into(),
                    author_id,
                    description: Some((*description).into()),
                    published_year: Some(*year),
                })
                .await?;
            report.books_created += 1;
        }
    }
    tracing::info!(
        authors = report.authors_created,
        books = report.books_created,
        "seed completed"
    );
    Ok(report)
}
