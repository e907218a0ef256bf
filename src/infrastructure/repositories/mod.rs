//! Repository implementations using SeaORM

pub mod address_repository;
pub mod author_repository;
pub mod book_repository;
pub mod country_repository;

pub use address_repository::SeaOrmAddressRepository;
pub use author_repository::SeaOrmAuthorRepository;
pub use book_repository::SeaOrmBookRepository;
pub use country_repository::SeaOrmCountryRepository;
