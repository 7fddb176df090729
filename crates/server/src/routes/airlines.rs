use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use service::airline_service;
use tracing::info;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::routes::AppState;

/// Full airline record; PUT overwrites every field.
#[derive(Debug, Deserialize, Serialize)]
pub struct AirlineInput {
    pub name: String,
    pub description: String,
    pub founded_date: NaiveDate,
    pub webpage: String,
}

#[utoipa::path(
    get, path = "/airlines", tag = "airlines",
    responses((status = 200, description = "List OK"))
)]
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<models::airline::Model>>, JsonApiError> {
    let list = airline_service::list_airlines(&state.db).await?;
    info!(count = list.len(), "list airlines");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/airlines/{id}", tag = "airlines",
    params(("id" = Uuid, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<models::airline::Model>, JsonApiError> {
    let airline = airline_service::get_airline(&state.db, id).await?;
    Ok(Json(airline))
}

#[utoipa::path(
    post, path = "/airlines", tag = "airlines",
    request_body = crate::openapi::AirlineInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AirlineInput>,
) -> Result<(StatusCode, Json<models::airline::Model>), JsonApiError> {
    let created = airline_service::create_airline(
        &state.db,
        &input.name,
        &input.description,
        input.founded_date,
        &input.webpage,
    )
    .await?;
    info!(id = %created.id, name = %created.name, "created airline");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/airlines/{id}", tag = "airlines",
    params(("id" = Uuid, Path, description = "Airline ID")),
    request_body = crate::openapi::AirlineInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<AirlineInput>,
) -> Result<Json<models::airline::Model>, JsonApiError> {
    let updated = airline_service::update_airline(
        &state.db,
        id,
        &input.name,
        &input.description,
        input.founded_date,
        &input.webpage,
    )
    .await?;
    info!(id = %updated.id, "updated airline");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/airlines/{id}", tag = "airlines",
    params(("id" = Uuid, Path, description = "Airline ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    airline_service::delete_airline(&state.db, id).await?;
    info!(%id, "deleted airline");
    Ok(StatusCode::NO_CONTENT)
}
