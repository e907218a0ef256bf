//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashMap;

use crate::domain::{Book, BookFilter, BookInput, BookRepository, Country, DomainError};
use crate::models::author::{self, Entity as AuthorEntity};
use crate::models::book::{ActiveModel, Column, Entity as BookEntity, Model};
use crate::models::book_countries::{self, Entity as BookCountryEntity};
use crate::models::country::{self, Entity as CountryEntity};

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Turn book rows (with their joined author) into DTOs carrying countries.
    /// Countries are fetched for the whole batch at once.
    async fn hydrate(
        &self,
        rows: Vec<(Model, Option<author::Model>)>,
    ) -> Result<Vec<Book>, DomainError> {
        let mut countries_by_book: HashMap<i32, Vec<Country>> = HashMap::new();

        if !rows.is_empty() {
            let book_ids: Vec<i32> = rows.iter().map(|(book, _)| book.id).collect();
            let links = BookCountryEntity::find()
                .filter(book_countries::Column::BookId.is_in(book_ids))
                .all(&self.db)
                .await?;

            if !links.is_empty() {
                let country_ids: Vec<i32> = links.iter().map(|link| link.country_id).collect();
                let countries: HashMap<i32, Country> = CountryEntity::find()
                    .filter(country::Column::Id.is_in(country_ids))
                    .all(&self.db)
                    .await?
                    .into_iter()
                    .map(|c| (c.id, Country::from(c)))
                    .collect();

                for link in links {
                    if let Some(country) = countries.get(&link.country_id) {
                        countries_by_book
                            .entry(link.book_id)
                            .or_default()
                            .push(country.clone());
                    }
                }
                for list in countries_by_book.values_mut() {
                    list.sort_by(|a, b| a.name.cmp(&b.name));
                }
            }
        }

        Ok(rows
            .into_iter()
            .map(|(book, writer)| Book {
                countries: countries_by_book.remove(&book.id).unwrap_or_default(),
                author: writer.as_ref().map(author::Model::full_name),
                id: book.id,
                title: book.title,
                rating: book.rating,
                slug: book.slug,
                is_bestselling: book.is_bestselling,
                author_id: book.author_id,
            })
            .collect())
    }

    /// Referenced author and countries must exist
    async fn check_references(&self, input: &BookInput) -> Result<(), DomainError> {
        if let Some(author_id) = input.author_id
            && AuthorEntity::find_by_id(author_id)
                .one(&self.db)
                .await?
                .is_none()
        {
            return Err(DomainError::Validation(format!(
                "author {} does not exist",
                author_id
            )));
        }

        let wanted = unique_ids(&input.country_ids);
        if !wanted.is_empty() {
            let found = CountryEntity::find()
                .filter(country::Column::Id.is_in(wanted.clone()))
                .count(&self.db)
                .await?;
            if found != wanted.len() as u64 {
                return Err(DomainError::Validation(format!(
                    "unknown country in {:?}",
                    wanted
                )));
            }
        }

        Ok(())
    }

    async fn find_one(&self, condition: sea_orm::Condition) -> Result<Option<Book>, DomainError> {
        let row = BookEntity::find()
            .find_also_related(AuthorEntity)
            .filter(condition)
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await?;

        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

fn unique_ids(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

async fn replace_countries<C>(db: &C, book_id: i32, country_ids: &[i32]) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    BookCountryEntity::delete_many()
        .filter(book_countries::Column::BookId.eq(book_id))
        .exec(db)
        .await?;

    for country_id in unique_ids(country_ids) {
        book_countries::ActiveModel {
            book_id: Set(book_id),
            country_id: Set(country_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError> {
        let mut query = BookEntity::find().find_also_related(AuthorEntity);

        if let Some(author_id) = filter.author_id {
            query = query.filter(Column::AuthorId.eq(author_id));
        }

        if let Some(rating) = filter.rating {
            query = query.filter(Column::Rating.eq(rating));
        }

        let rows = query
            .order_by_desc(Column::Rating)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        tracing::debug!("DB query returned {} books", rows.len());
        self.hydrate(rows).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
        self.find_one(sea_orm::Condition::all().add(Column::Id.eq(id)))
            .await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Book>, DomainError> {
        self.find_one(sea_orm::Condition::all().add(Column::Slug.eq(slug)))
            .await
    }

    async fn create(&self, input: BookInput) -> Result<Book, DomainError> {
        input.validate()?;
        self.check_references(&input).await?;

        let txn = self.db.begin().await?;

        // Slug is filled in by ActiveModelBehavior::before_save
        let new_book = ActiveModel {
            title: Set(input.title),
            rating: Set(input.rating),
            author_id: Set(input.author_id),
            is_bestselling: Set(input.is_bestselling),
            ..Default::default()
        };

        let model = new_book.insert(&txn).await?;
        replace_countries(&txn, model.id, &input.country_ids).await?;
        txn.commit().await?;

        tracing::info!("Created book {} at {}", model.display(), model.absolute_url());
        self.find_by_id(model.id).await?.ok_or(DomainError::NotFound)
    }

    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError> {
        input.validate()?;

        let existing = BookEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.check_references(&input).await?;

        let txn = self.db.begin().await?;

        let mut active: ActiveModel = existing.into();
        active.title = Set(input.title);
        active.rating = Set(input.rating);
        active.author_id = Set(input.author_id);
        active.is_bestselling = Set(input.is_bestselling);

        active.update(&txn).await?;
        replace_countries(&txn, id, &input.country_ids).await?;
        txn.commit().await?;

        self.find_by_id(id).await?.ok_or(DomainError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        BookCountryEntity::delete_many()
            .filter(book_countries::Column::BookId.eq(id))
            .exec(&txn)
            .await?;

        let result = BookEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
