//! SeaORM implementation of AddressRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::domain::{Address, AddressInput, AddressRepository, DomainError};
use crate::models::address::{self, ActiveModel, Entity as AddressEntity};
use crate::models::author::{self, Entity as AuthorEntity};

impl From<address::Model> for Address {
    fn from(model: address::Model) -> Self {
        Self {
            id: model.id,
            street: model.street,
            postal_code: model.postal_code,
            city: model.city,
        }
    }
}

/// SeaORM-based implementation of AddressRepository
pub struct SeaOrmAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn find_all(&self) -> Result<Vec<Address>, DomainError> {
        let addresses = AddressEntity::find()
            .order_by_asc(address::Column::Id)
            .all(&self.db)
            .await?;

        Ok(addresses.into_iter().map(Address::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Address>, DomainError> {
        let address = AddressEntity::find_by_id(id).one(&self.db).await?;
        Ok(address.map(Address::from))
    }

    async fn create(&self, input: AddressInput) -> Result<Address, DomainError> {
        input.validate()?;

        let address = ActiveModel {
            street: Set(input.street),
            postal_code: Set(input.postal_code),
            city: Set(input.city),
            ..Default::default()
        };

        let result = address.insert(&self.db).await?;
        tracing::info!("Created address {}", result.display());
        Ok(Address::from(result))
    }

    async fn update(&self, id: i32, input: AddressInput) -> Result<Address, DomainError> {
        input.validate()?;

        let existing = AddressEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.street = Set(input.street);
        active.postal_code = Set(input.postal_code);
        active.city = Set(input.city);

        let result = active.update(&self.db).await?;
        Ok(Address::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        AuthorEntity::update_many()
            .col_expr(author::Column::AddressId, Expr::value(Option::<i32>::None))
            .filter(author::Column::AddressId.eq(id))
            .exec(&txn)
            .await?;

        let result = AddressEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
