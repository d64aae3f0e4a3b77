use axum::{extract::State, Json};
use serde::Serialize;
use service::client::domain::{ClientResponse, CreateClientInput, SortDirection, UpdateClientInput};
use service::pagination::Pagination;
use tracing::info;

use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub detail: &'static str,
}

#[utoipa::path(
    post, path = "/client/", tag = "client",
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ClientResponseDoc),
        (status = 400, description = "State outside the service area", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already in use", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Malformed body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<AppState>, ApiJson(input): ApiJson<CreateClientInput>) -> Result<Json<ClientResponse>, JsonApiError> {
    info!(state = %input.fields.state, event_type = %input.fields.event_type, "client_create_request");
    let created = state.clients.create(input).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/client/", tag = "client",
    params(
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return")
    ),
    responses((status = 200, description = "All clients", body = [crate::openapi::ClientResponseDoc]))
)]
pub async fn list(State(state): State<AppState>, ApiQuery(page): ApiQuery<Pagination>) -> Result<Json<Vec<ClientResponse>>, JsonApiError> {
    let rows = state.clients.list(page).await?;
    info!(count = rows.len(), "list clients");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/client/{id}", tag = "client",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClientResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<ClientResponse>, JsonApiError> {
    Ok(Json(state.clients.get(id).await?))
}

#[utoipa::path(
    get, path = "/client/sort/{direction}", tag = "client",
    params(
        ("direction" = String, Path, description = "`asc` or `desc`"),
        ("offset" = Option<u64>, Query, description = "Rows to skip"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return")
    ),
    responses(
        (status = 200, description = "Clients ordered by event date", body = [crate::openapi::ClientResponseDoc]),
        (status = 400, description = "Unknown direction", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn sort_by_date(
    State(state): State<AppState>,
    ApiPath(direction): ApiPath<SortDirection>,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<Vec<ClientResponse>>, JsonApiError> {
    let rows = state.clients.list_sorted_by_date(direction, page).await?;
    info!(count = rows.len(), ?direction, "list clients by date");
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/client/{id}", tag = "client",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = crate::openapi::ClientInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientResponseDoc),
        (status = 400, description = "State outside the service area", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Email already in use", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateClientInput>,
) -> Result<Json<ClientResponse>, JsonApiError> {
    let updated = state.clients.update(id, input).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/client/{id}", tag = "client",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<Json<DeleteOutput>, JsonApiError> {
    state.clients.delete(id).await?;
    Ok(Json(DeleteOutput { detail: "Client deleted successfully" }))
}
