//! Author admin handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::api::error_response;
use crate::domain::{Author, AuthorInput};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/admin/authors",
    responses(
        (status = 200, description = "Authors by last, then first name", body = [Author])
    ),
    tag = "authors"
)]
pub async fn list_authors(State(state): State<AppState>) -> impl IntoResponse {
    match state.author_repo.find_all().await {
        Ok(authors) => Json(json!({
            "total": authors.len(),
            "authors": authors,
        }))
        .into_response(),
        Err(e) => error_response(e, "Author"),
    }
}

#[utoipa::path(
    post,
    path = "/admin/authors",
    request_body = AuthorInput,
    responses(
        (status = 201, description = "Author created"),
        (status = 422, description = "Invalid name or address reference")
    ),
    tag = "authors"
)]
pub async fn create_author(
    State(state): State<AppState>,
    Json(payload): Json<AuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.create(payload).await {
        Ok(author) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Author created successfully",
                "author": author
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Author"),
    }
}

#[utoipa::path(
    get,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author", body = Author),
        (status = 404, description = "Unknown author")
    ),
    tag = "authors"
)]
pub async fn get_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.author_repo.find_by_id(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(json!({ "author": author }))).into_response(),
        Ok(None) => error_response(crate::domain::DomainError::NotFound, "Author"),
        Err(e) => error_response(e, "Author"),
    }
}

#[utoipa::path(
    put,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    request_body = AuthorInput,
    responses(
        (status = 200, description = "Author replaced"),
        (status = 404, description = "Unknown author"),
        (status = 422, description = "Invalid name or address reference")
    ),
    tag = "authors"
)]
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AuthorInput>,
) -> impl IntoResponse {
    match state.author_repo.update(id, payload).await {
        Ok(author) => Json(json!({
            "message": "Author updated successfully",
            "author": author
        }))
        .into_response(),
        Err(e) => error_response(e, "Author"),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author deleted along with its address; their books lose the author"),
        (status = 404, description = "Unknown author")
    ),
    tag = "authors"
)]
pub async fn delete_author(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.author_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Author deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e, "Author"),
    }
}
