//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{AddressRepository, AuthorRepository, BookRepository, CountryRepository};
use crate::infrastructure::{
    SeaOrmAddressRepository, SeaOrmAuthorRepository, SeaOrmBookRepository,
    SeaOrmCountryRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// Author repository
    pub author_repo: Arc<dyn AuthorRepository>,
    /// Address repository
    pub address_repo: Arc<dyn AddressRepository>,
    /// Country repository
    pub country_repo: Arc<dyn CountryRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            book_repo: Arc::new(SeaOrmBookRepository::new(db.clone())),
            author_repo: Arc::new(SeaOrmAuthorRepository::new(db.clone())),
            address_repo: Arc::new(SeaOrmAddressRepository::new(db.clone())),
            country_repo: Arc::new(SeaOrmCountryRepository::new(db)),
        }
    }
}
