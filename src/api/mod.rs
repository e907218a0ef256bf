pub mod address;
pub mod author;
pub mod books;
pub mod country;
pub mod health;
pub mod pages;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

/// Public pages plus the health check
pub fn site_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/all-books", get(pages::all_books))
        .route("/book-detail/:slug", get(pages::book_detail))
}

/// Administrative CRUD over every entity, mounted under `/admin`
pub fn admin_router() -> Router<AppState> {
    Router::new()
        // Countries
        .route(
            "/countries",
            get(country::list_countries).post(country::create_country),
        )
        .route(
            "/countries/:id",
            get(country::get_country)
                .put(country::update_country)
                .delete(country::delete_country),
        )
        // Addresses
        .route(
            "/addresses",
            get(address::list_addresses).post(address::create_address),
        )
        .route(
            "/addresses/:id",
            get(address::get_address)
                .put(address::update_address)
                .delete(address::delete_address),
        )
        // Authors
        .route(
            "/authors",
            get(author::list_authors).post(author::create_author),
        )
        .route(
            "/authors/:id",
            get(author::get_author)
                .put(author::update_author)
                .delete(author::delete_author),
        )
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
}

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        .merge(site_router())
        .nest("/admin", admin_router())
        .with_state(state)
}

/// Map a domain failure onto a JSON error response
pub(crate) fn error_response(e: DomainError, what: &str) -> Response {
    match e {
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("{} not found", what)})),
        )
            .into_response(),
        DomainError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": msg})),
        )
            .into_response(),
        DomainError::Database(msg) => {
            tracing::error!("{} request failed: {}", what, msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Database error: {}", msg)})),
            )
                .into_response()
        }
    }
}
