//! Book admin handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::api::error_response;
use crate::domain::{Book, BookFilter, BookInput};
use crate::infrastructure::AppState;

/// List filters, mirroring the admin sidebar (author, rating)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListQuery {
    /// Only books by this author
    pub author_id: Option<i32>,
    /// Only books with exactly this rating
    pub rating: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/admin/books",
    params(BookListQuery),
    responses(
        (status = 200, description = "Books, best rated first")
    ),
    tag = "books"
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookListQuery>,
) -> impl IntoResponse {
    let filter = BookFilter {
        author_id: query.author_id,
        rating: query.rating,
    };

    match state.book_repo.find_all(filter).await {
        Ok(books) => Json(json!({
            "total": books.len(),
            "books": books,
        }))
        .into_response(),
        Err(e) => error_response(e, "Book"),
    }
}

#[utoipa::path(
    post,
    path = "/admin/books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created, slug derived from title"),
        (status = 422, description = "Invalid title, rating or reference")
    ),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookInput>,
) -> impl IntoResponse {
    match state.book_repo.create(payload).await {
        Ok(book) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Book created successfully",
                "book": book
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Book"),
    }
}

#[utoipa::path(
    get,
    path = "/admin/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book", body = Book),
        (status = 404, description = "Unknown book")
    ),
    tag = "books"
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.find_by_id(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(json!({ "book": book }))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Book not found" })),
        )
            .into_response(),
        Err(e) => error_response(e, "Book"),
    }
}

#[utoipa::path(
    put,
    path = "/admin/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book replaced, slug re-derived"),
        (status = 404, description = "Unknown book"),
        (status = 422, description = "Invalid title, rating or reference")
    ),
    tag = "books"
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookInput>,
) -> impl IntoResponse {
    match state.book_repo.update(id, payload).await {
        Ok(book) => Json(json!({
            "message": "Book updated successfully",
            "book": book
        }))
        .into_response(),
        Err(e) => error_response(e, "Book"),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/books/{id}",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Unknown book")
    ),
    tag = "books"
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.book_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Book deleted successfully"})),
        )
            .into_response(),
        Err(e) => error_response(e, "Book"),
    }
}
