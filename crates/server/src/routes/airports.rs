use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use service::airport_service;
use tracing::info;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::routes::AppState;

/// Full airport record; PUT overwrites every field.
#[derive(Debug, Deserialize, Serialize)]
pub struct AirportInput {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

#[utoipa::path(
    get, path = "/airports", tag = "airports",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::airport::Model>>, JsonApiError> {
    let list = airport_service::list_airports(&state.db).await?;
    info!(count = list.len(), "list airports");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/airports/{id}", tag = "airports",
    params(("id" = Uuid, Path, description = "Airport ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::airport::Model>, JsonApiError> {
    let airport = airport_service::get_airport(&state.db, id).await?;
    Ok(Json(airport))
}

#[utoipa::path(
    post, path = "/airports", tag = "airports",
    request_body = crate::openapi::AirportInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AirportInput>,
) -> Result<(StatusCode, Json<models::airport::Model>), JsonApiError> {
    let created = airport_service::create_airport(
        &state.db,
        &input.name,
        &input.code,
        &input.country,
        &input.city,
    )
    .await?;
    info!(id = %created.id, code = %created.code, "created airport");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/airports/{id}", tag = "airports",
    params(("id" = Uuid, Path, description = "Airport ID")),
    request_body = crate::openapi::AirportInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AirportInput>,
) -> Result<Json<models::airport::Model>, JsonApiError> {
    let updated = airport_service::update_airport(
        &state.db,
        id,
        &input.name,
        &input.code,
        &input.country,
        &input.city,
    )
    .await?;
    info!(id = %updated.id, "updated airport");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/airports/{id}", tag = "airports",
    params(("id" = Uuid, Path, description = "Airport ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    airport_service::delete_airport(&state.db, id).await?;
    info!(%id, "deleted airport");
    Ok(StatusCode::NO_CONTENT)
}
