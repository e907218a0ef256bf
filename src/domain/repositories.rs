//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// Country data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub code: String,
}

/// Input for creating or replacing a country
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CountryInput {
    pub name: String,
    pub code: String,
}

/// Repository trait for Country entity
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Find all countries, ordered by name
    async fn find_all(&self) -> Result<Vec<Country>, DomainError>;

    /// Find a country by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Country>, DomainError>;

    /// Create a new country
    async fn create(&self, input: CountryInput) -> Result<Country, DomainError>;

    /// Replace an existing country
    async fn update(&self, id: i32, input: CountryInput) -> Result<Country, DomainError>;

    /// Delete a country by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Address data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

/// Input for creating or replacing an address
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddressInput {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

/// Repository trait for Address entity
#[async_trait]
pub trait AddressRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Address>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Address>, DomainError>;

    async fn create(&self, input: AddressInput) -> Result<Address, DomainError>;

    async fn update(&self, id: i32, input: AddressInput) -> Result<Address, DomainError>;

    /// Delete an address; an author living there keeps existing without one
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Author data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub address_id: Option<i32>,
}

/// Input for creating or replacing an author
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorInput {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address_id: Option<i32>,
}

/// Repository trait for Author entity
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Find all authors, ordered by last then first name
    async fn find_all(&self) -> Result<Vec<Author>, DomainError>;

    /// Find an author by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DomainError>;

    /// Create a new author
    async fn create(&self, input: AuthorInput) -> Result<Author, DomainError>;

    /// Replace an existing author
    async fn update(&self, id: i32, input: AuthorInput) -> Result<Author, DomainError>;

    /// Delete an author together with its address.
    /// Books written by the author are kept with no author.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Book data for API responses and pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub rating: i32,
    pub slug: String,
    pub is_bestselling: bool,
    pub author_id: Option<i32>,
    /// Full name of the author, if any
    pub author: Option<String>,
    pub countries: Vec<Country>,
}

impl Book {
    /// Canonical detail page URL
    pub fn absolute_url(&self) -> String {
        format!("/book-detail/{}", self.slug)
    }
}

/// Input for creating or replacing a book. The slug is always derived
/// from the title, so it is not part of the input.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: String,
    pub rating: i32,
    #[serde(default)]
    pub author_id: Option<i32>,
    #[serde(default)]
    pub is_bestselling: bool,
    #[serde(default)]
    pub country_ids: Vec<i32>,
}

/// Filter criteria for book queries
#[derive(Debug, Default, Clone)]
pub struct BookFilter {
    pub author_id: Option<i32>,
    pub rating: Option<i32>,
}

/// Repository trait for Book entity
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find all books matching the filter, best rated first (ties by id)
    async fn find_all(&self, filter: BookFilter) -> Result<Vec<Book>, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError>;

    /// Find the book with the given slug (lowest id if several share it)
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Book>, DomainError>;

    /// Create a new book
    async fn create(&self, input: BookInput) -> Result<Book, DomainError>;

    /// Replace an existing book, re-deriving its slug
    async fn update(&self, id: i32, input: BookInput) -> Result<Book, DomainError>;

    /// Delete a book by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
