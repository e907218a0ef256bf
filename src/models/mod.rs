pub mod address;
pub mod author;
pub mod book;
pub mod book_countries;
pub mod country;
