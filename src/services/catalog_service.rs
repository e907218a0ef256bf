//! Catalog Service - listing and detail lookups behind the public pages

use crate::domain::{Book, BookFilter, BookRepository, Country, DomainError};
use crate::utils::is_valid_slug;

/// Every book, best rated first, with summary figures
#[derive(Debug, Clone)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub total: usize,
    /// `None` for an empty catalog
    pub average_rating: Option<f64>,
}

/// What the detail page shows about one book
#[derive(Debug, Clone, PartialEq)]
pub struct BookDetail {
    pub title: String,
    pub author: Option<String>,
    pub rating: i32,
    pub is_bestselling: bool,
    pub countries: Vec<Country>,
}

impl From<Book> for BookDetail {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            rating: book.rating,
            is_bestselling: book.is_bestselling,
            countries: book.countries,
        }
    }
}

pub fn average_rating(books: &[Book]) -> Option<f64> {
    if books.is_empty() {
        return None;
    }
    let sum: i64 = books.iter().map(|b| i64::from(b.rating)).sum();
    Some(sum as f64 / books.len() as f64)
}

pub async fn all_books(repo: &dyn BookRepository) -> Result<Catalog, DomainError> {
    let books = repo.find_all(BookFilter::default()).await?;
    let average = average_rating(&books);

    tracing::debug!(
        "Catalog: {} books, average rating {:?}",
        books.len(),
        average
    );

    Ok(Catalog {
        total: books.len(),
        average_rating: average,
        books,
    })
}

pub async fn book_detail(repo: &dyn BookRepository, slug: &str) -> Result<BookDetail, DomainError> {
    if !is_valid_slug(slug) {
        return Err(DomainError::NotFound);
    }

    repo.find_by_slug(slug)
        .await?
        .map(BookDetail::from)
        .ok_or(DomainError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookInput;
    use async_trait::async_trait;

    fn book(id: i32, title: &str, rating: i32) -> Book {
        Book {
            id,
            title: title.to_string(),
            rating,
            slug: crate::utils::slugify(title),
            is_bestselling: false,
            author_id: None,
            author: None,
            countries: vec![],
        }
    }

    /// Serves a fixed, already ordered list
    struct FixedBooks(Vec<Book>);

    #[async_trait]
    impl BookRepository for FixedBooks {
        async fn find_all(&self, _filter: BookFilter) -> Result<Vec<Book>, DomainError> {
            Ok(self.0.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DomainError> {
            Ok(self.0.iter().find(|b| b.id == id).cloned())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<Book>, DomainError> {
            Ok(self.0.iter().find(|b| b.slug == slug).cloned())
        }

        async fn create(&self, _input: BookInput) -> Result<Book, DomainError> {
            unimplemented!()
        }

        async fn update(&self, _id: i32, _input: BookInput) -> Result<Book, DomainError> {
            unimplemented!()
        }

        async fn delete(&self, _id: i32) -> Result<(), DomainError> {
            unimplemented!()
        }
    }

    #[test]
    fn test_average_rating() {
        let books = vec![
            book(1, "Harry Potter 1", 5),
            book(2, "Lord of the Rings", 4),
            book(3, "My Story", 2),
            book(4, "Some Random Book", 1),
        ];
        assert_eq!(average_rating(&books), Some(3.0));
        assert_eq!(average_rating(&books[..2]), Some(4.5));
        assert_eq!(average_rating(&[]), None);
    }

    #[tokio::test]
    async fn test_all_books_counts_what_it_returns() {
        let repo = FixedBooks(vec![book(1, "Harry Potter 1", 5), book(2, "My Story", 2)]);

        let catalog = all_books(&repo).await.unwrap();
        assert_eq!(catalog.total, catalog.books.len());
        assert_eq!(catalog.total, 2);
        assert_eq!(catalog.average_rating, Some(3.5));
    }

    #[tokio::test]
    async fn test_book_detail() {
        let repo = FixedBooks(vec![book(1, "Harry Potter 1", 5)]);

        let detail = book_detail(&repo, "harry-potter-1").await.unwrap();
        assert_eq!(detail.title, "Harry Potter 1");
        assert_eq!(detail.rating, 5);

        assert!(matches!(
            book_detail(&repo, "unknown").await,
            Err(DomainError::NotFound)
        ));
        assert!(matches!(
            book_detail(&repo, "not a slug").await,
            Err(DomainError::NotFound)
        ));
    }
}
