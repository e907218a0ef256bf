//! Public HTML pages: the catalog and one page per book

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services;
use crate::templates;

pub async fn all_books(State(state): State<AppState>) -> impl IntoResponse {
    match services::all_books(state.book_repo.as_ref()).await {
        Ok(catalog) => Html(templates::all_books(&catalog)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list books: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub async fn book_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match services::book_detail(state.book_repo.as_ref(), &slug).await {
        Ok(book) => Html(templates::book_detail(&book)).into_response(),
        Err(DomainError::NotFound) => (
            StatusCode::NOT_FOUND,
            Html(templates::not_found(&format!("No book matches \"{}\".", slug))),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to load book {}: {}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
