//! SeaORM implementation of AuthorRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::{Author, AuthorInput, AuthorRepository, DomainError};
use crate::models::address::Entity as AddressEntity;
use crate::models::author::{self, ActiveModel, Entity as AuthorEntity};
use crate::models::book::{self, Entity as BookEntity};

impl From<author::Model> for Author {
    fn from(model: author::Model) -> Self {
        Self {
            full_name: model.full_name(),
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            address_id: model.address_id,
        }
    }
}

/// SeaORM-based implementation of AuthorRepository
pub struct SeaOrmAuthorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAuthorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// An address can belong to one author at most
    async fn check_address(
        &self,
        address_id: Option<i32>,
        author_id: Option<i32>,
    ) -> Result<(), DomainError> {
        let Some(address_id) = address_id else {
            return Ok(());
        };

        if AddressEntity::find_by_id(address_id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "address {} does not exist",
                address_id
            )));
        }

        let mut taken = AuthorEntity::find().filter(author::Column::AddressId.eq(address_id));
        if let Some(author_id) = author_id {
            taken = taken.filter(author::Column::Id.ne(author_id));
        }
        if taken.count(&self.db).await? > 0 {
            return Err(DomainError::Validation(format!(
                "address {} already belongs to another author",
                address_id
            )));
        }

        Ok(())
    }
}

async fn delete_with_address<C>(db: &C, id: i32) -> Result<(), DomainError>
where
    C: ConnectionTrait,
{
    let existing = AuthorEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DomainError::NotFound)?;

    // Books outlive their author
    BookEntity::update_many()
        .col_expr(book::Column::AuthorId, Expr::value(Option::<i32>::None))
        .filter(book::Column::AuthorId.eq(id))
        .exec(db)
        .await?;

    AuthorEntity::delete_by_id(id).exec(db).await?;

    if let Some(address_id) = existing.address_id {
        AddressEntity::delete_by_id(address_id).exec(db).await?;
    }

    Ok(())
}

#[async_trait]
impl AuthorRepository for SeaOrmAuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DomainError> {
        let authors = AuthorEntity::find()
            .order_by_asc(author::Column::LastName)
            .order_by_asc(author::Column::FirstName)
            .all(&self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError> {
        let author = AuthorEntity::find_by_id(id).one(&self.db).await?;
        Ok(author.map(Author::from))
    }

    async fn create(&self, input: AuthorInput) -> Result<Author, DomainError> {
        input.validate()?;
        self.check_address(input.address_id, None).await?;

        let author = ActiveModel {
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            address_id: Set(input.address_id),
            ..Default::default()
        };

        let result = author.insert(&self.db).await?;
        tracing::info!("Created author {}", result.full_name());
        Ok(Author::from(result))
    }

    async fn update(&self, id: i32, input: AuthorInput) -> Result<Author, DomainError> {
        input.validate()?;

        let existing = AuthorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        self.check_address(input.address_id, Some(id)).await?;

        let mut active: ActiveModel = existing.into();
        active.first_name = Set(input.first_name);
        active.last_name = Set(input.last_name);
        active.address_id = Set(input.address_id);

        let result = active.update(&self.db).await?;
        Ok(Author::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        match delete_with_address(&txn, id).await {
            Ok(()) => {
                txn.commit().await?;
                tracing::info!("Deleted author {} and its address", id);
                Ok(())
            }
            Err(e) => {
                txn.rollback().await?;
                Err(e)
            }
        }
    }
}
