//! Address admin handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::api::error_response;
use crate::domain::{Address, AddressInput};
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/admin/addresses",
    responses(
        (status = 200, description = "Addresses in creation order", body = [Address])
    ),
    tag = "addresses"
)]
pub async fn list_addresses(State(state): State<AppState>) -> impl IntoResponse {
    match state.address_repo.find_all().await {
        Ok(addresses) => Json(json!({
            "total": addresses.len(),
            "addresses": addresses,
        }))
        .into_response(),
        Err(e) => error_response(e, "Address"),
    }
}

#[utoipa::path(
    post,
    path = "/admin/addresses",
    request_body = AddressInput,
    responses(
        (status = 201, description = "Address created"),
        (status = 422, description = "Field too long or missing")
    ),
    tag = "addresses"
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<AddressInput>,
) -> impl IntoResponse {
    match state.address_repo.create(payload).await {
        Ok(address) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Address created successfully",
                "address": address
            })),
        )
            .into_response(),
        Err(e) => error_response(e, "Address"),
    }
}

#[utoipa::path(
    get,
    path = "/admin/addresses/{id}",
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 200, description = "The address", body = Address),
        (status = 404, description = "Unknown address")
    ),
    tag = "addresses"
)]
pub async fn get_address(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.address_repo.find_by_id(id).await {
        Ok(Some(address)) => (StatusCode::OK, Json(json!({ "address": address }))).into_response(),
        Ok(None) => error_response(crate::domain::DomainError::NotFound, "Address"),
        Err(e) => error_response(e, "Address"),
    }
}

#[utoipa::path(
    put,
    path = "/admin/addresses/{id}",
    params(("id" = i32, Path, description = "Address id")),
    request_body = AddressInput,
    responses(
        (status = 200, description = "Address replaced"),
        (status = 404, description = "Unknown address"),
        (status = 422, description = "Field too long or missing")
    ),
    tag = "addresses"
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddressInput>,
) -> impl IntoResponse {
    match state.address_repo.update(id, payload).await {
        Ok(address) => Json(json!({
            "message": "Address updated successfully",
            "address": address
        }))
        .into_response(),
        Err(e) => error_response(e, "Address"),
    }
}

#[utoipa::path(
    delete,
    path = "/admin/addresses/{id}",
    params(("id" = i32, Path, description = "Address id")),
    responses(
        (status = 200, description = "Address deleted; an author living there keeps existing"),
        (status = 404, description = "Unknown address")
    ),
    tag = "addresses"
)]
pub async fn delete_address(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.address_repo.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Address deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e, "Address"),
    }
}
