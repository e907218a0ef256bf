use crate::api;
use crate::domain::{Address, AddressInput, Author, AuthorInput, Book, BookInput, Country, CountryInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::country::list_countries,
        api::country::create_country,
        api::country::get_country,
        api::country::update_country,
        api::country::delete_country,
        api::address::list_addresses,
        api::address::create_address,
        api::address::get_address,
        api::address::update_address,
        api::address::delete_address,
        api::author::list_authors,
        api::author::create_author,
        api::author::get_author,
        api::author::update_author,
        api::author::delete_author,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
    ),
    components(
        schemas(
            Country, CountryInput,
            Address, AddressInput,
            Author, AuthorInput,
            Book, BookInput,
        )
    ),
    tags(
        (name = "books", description = "Book catalog administration"),
        (name = "authors", description = "Authors and their addresses"),
        (name = "addresses", description = "Postal addresses"),
        (name = "countries", description = "Countries books are published in")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_admin_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/admin/books",
            "/admin/books/{id}",
            "/admin/authors/{id}",
            "/admin/addresses",
            "/admin/countries/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
