//! SeaORM implementation of CountryRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{Country, CountryInput, CountryRepository, DomainError};
use crate::models::country::{self, ActiveModel, Entity as CountryEntity};

impl From<country::Model> for Country {
    fn from(model: country::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            code: model.code,
        }
    }
}

/// SeaORM-based implementation of CountryRepository
pub struct SeaOrmCountryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCountryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CountryRepository for SeaOrmCountryRepository {
    async fn find_all(&self) -> Result<Vec<Country>, DomainError> {
        let countries = CountryEntity::find()
            .order_by_asc(country::Column::Name)
            .all(&self.db)
            .await?;

        Ok(countries.into_iter().map(Country::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Country>, DomainError> {
        let country = CountryEntity::find_by_id(id).one(&self.db).await?;
        Ok(country.map(Country::from))
    }

    async fn create(&self, input: CountryInput) -> Result<Country, DomainError> {
        input.validate()?;

        let country = ActiveModel {
            name: Set(input.name.trim().to_string()),
            code: Set(input.code.to_ascii_uppercase()),
            ..Default::default()
        };

        let result = country.insert(&self.db).await?;
        tracing::info!("Created country {} ({})", result.name, result.code);
        Ok(Country::from(result))
    }

    async fn update(&self, id: i32, input: CountryInput) -> Result<Country, DomainError> {
        input.validate()?;

        let existing = CountryEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name.trim().to_string());
        active.code = Set(input.code.to_ascii_uppercase());

        let result = active.update(&self.db).await?;
        Ok(Country::from(result))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = CountryEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}
