//! Country admin handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::api::error_response;
use crate::domain::{Country, CountryInput};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/admin/countries",
    responses(
        (status = 200, description = "Countries by name", body = [Country])
    ),
    tag = "countries"
)]
pub async fn list_countries(State(state): State<AppState>) -> impl IntoResponse {
    match state.country_repo.find_all().await {
        Ok(countries) => Json(json!({
            "total": countries.len(),
            "countries": countries,
        }))
        .into_response(),
        Err(e) => error_response(e, "Country"),
    }
}

#[utoipa::path(
    post,
    path = "/admin/countries",
    request_body = CountryInput,
    responses(
        (status = 201, description = "Country created"),
        (status = 422, description = "Missing name or code not two letters")
    ),
    tag = "countries"
)]
pub async fn create_country(
    State(state): State<AppState>,
    Json(payload): Json<CountryInput>,
) -> impl IntoResponse {
    match state.country_repo.create(payload).await {
        Ok(country) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Country created successfully",
                "country": country
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Country"),
    }
}

#[utoipa::path(
    get,
    path = "/admin/countries/{id}",
    params(("id" = i32, Path, description = "Country id")),
    responses(
        (status = 200, description = "The country", body = Country),
        (status = 404, description = "Unknown country")
    ),
    tag = "countries"
)]
pub async fn get_country(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.country_repo.find_by_id(id).await {
        Ok(Some(country)) => (StatusCode::OK, Json(json!({ "country": country }))).into_response(),
        Ok(None) => error_response(crate::domain::DomainError::NotFound, "Country"),
        Err(e) => error_response(e, "Country"),
    }
}

#[utoipa::path(
    put,
    path = "/admin/countries/{id}",
    params(("id" = i32, Path, description = "Country id")),
    request_body = CountryInput,
    responses(
        (status = 200, description = "Country replaced"),
        (status = 404, description = "Unknown country"),
        (status = 422, description = "Missing name or code not two letters")
    ),
    tag = "countries"
)]
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CountryInput>,
) -> impl IntoResponse {
    match state.country_repo.update(id, payload).await {
        Ok(country) => Json(json!({
            "message": "Country updated successfully",
            "country": country
        }))
        .into_response(),
        Err(e) => error_response(e, "Country"),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/countries/{id}",
    params(("id" = i32, Path, description = "Country id")),
    responses(
        (status = 200, description = "Country deleted and unlinked from its books"),
        (status = 404, description = "Unknown country")
    ),
    tag = "countries"
)]
pub async fn delete_country(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.country_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Country deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e, "Country"),
    }
}
