//! Demo catalog used by `SEED_DEMO=1`

use crate::domain::{
    AddressInput, AuthorInput, BookFilter, BookInput, CountryInput, DomainError,
};
use crate::infrastructure::AppState;

pub async fn seed_demo_data(state: &AppState) -> Result<(), DomainError> {
    // Never duplicate an existing catalog
    if !state.book_repo.find_all(BookFilter::default()).await?.is_empty() {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(());
    }

    // 1. Countries
    let uk = state
        .country_repo
        .create(CountryInput {
            name: "United Kingdom".to_owned(),
            code: "GB".to_owned(),
        })
        .await?;
    let germany = state
        .country_repo
        .create(CountryInput {
            name: "Germany".to_owned(),
            code: "DE".to_owned(),
        })
        .await?;

    // 2. Authors with their addresses
    let rowling_home = state
        .address_repo
        .create(AddressInput {
            street: "Privet Drive 4".to_owned(),
            postal_code: "12345".to_owned(),
            city: "Little Whinging".to_owned(),
        })
        .await?;
    let rowling = state
        .author_repo
        .create(AuthorInput {
            first_name: "J.K.".to_owned(),
            last_name: "Rowling".to_owned(),
            address_id: Some(rowling_home.id),
        })
        .await?;
    let tolkien = state
        .author_repo
        .create(AuthorInput {
            first_name: "J.R.R.".to_owned(),
            last_name: "Tolkien".to_owned(),
            address_id: None,
        })
        .await?;

    // 3. Books
    let books = vec![
        ("Harry Potter 1", 5, Some(rowling.id), true, vec![uk.id, germany.id]),
        ("Lord of the Rings", 4, Some(tolkien.id), false, vec![uk.id]),
        ("My Story", 2, None, false, vec![]),
        ("Some Random Book", 1, None, false, vec![germany.id]),
    ];

    for (title, rating, author_id, is_bestselling, country_ids) in books {
        state
            .book_repo
            .create(BookInput {
                title: title.to_owned(),
                rating,
                author_id,
                is_bestselling,
                country_ids,
            })
            .await?;
    }

    Ok(())
}
