use crate::{
    dtos::resource::{ErrorResponse, ListParams, ListResponse},
    error::ApiError,
    store::Store,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use log::info;
use serde_json::Value;

/// List a collection
#[utoipa::path(
    get,
    path = "/v1/{collection}/",
    params(
        ("collection" = String, Path, description = "customers, rooms, bookings or users"),
        ListParams
    ),
    responses(
        (status = 200, description = "Collection retrieved", body = ListResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn list(
    State(store): State<Store>,
    Path(collection): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListResponse>, ApiError> {
    let (results, count) = store.list(&collection, params.page())?;

    Ok(Json(ListResponse { results, count }))
}

/// Create an entry; the server assigns its `id`
#[utoipa::path(
    post,
    path = "/v1/{collection}/",
    params(
        ("collection" = String, Path, description = "customers, rooms, bookings or users")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Entry created", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Unknown collection", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn create(
    State(store): State<Store>,
    Path(collection): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let created = store.insert(&collection, body)?;
    info!("Created {collection} {}", created["id"]);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Get one entry by id
#[utoipa::path(
    get,
    path = "/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "customers, rooms, bookings or users"),
        ("id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry found", body = serde_json::Value),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn fetch(
    State(store): State<Store>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(store.get(&collection, &id)?))
}

/// Merge the given fields into an entry
#[utoipa::path(
    put,
    path = "/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "customers, rooms, bookings or users"),
        ("id" = String, Path, description = "Entry ID")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Entry updated", body = serde_json::Value),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn update(
    State(store): State<Store>,
    Path((collection, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let updated = store.update(&collection, &id, body)?;
    info!("Updated {collection} {id}");

    Ok(Json(updated))
}

/// Delete an entry
#[utoipa::path(
    delete,
    path = "/v1/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "customers, rooms, bookings or users"),
        ("id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = ErrorResponse)
    ),
    tag = "Resources"
)]
pub async fn remove(
    State(store): State<Store>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    store.remove(&collection, &id)?;
    info!("Deleted {collection} {id}");

    Ok(StatusCode::NO_CONTENT)
}
