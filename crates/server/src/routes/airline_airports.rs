//! Association management between airlines and airports.
//!
//! The PUT body accepts full airport records as well as bare `{"id": ...}`
//! references; only the ids are honored.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use service::airline_airport_service::{self, AirlineWithAirports};
use tracing::info;
use uuid::Uuid;

use crate::errors::JsonApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct AirportRef {
    pub id: Uuid,
}

#[utoipa::path(
    post, path = "/airlines/{airline_id}/airports/{airport_id}", tag = "associations",
    params(
        ("airline_id" = Uuid, Path, description = "Airline ID"),
        ("airport_id" = Uuid, Path, description = "Airport ID")
    ),
    responses(
        (status = 201, description = "Airport linked; airline returned with its airport set"),
        (status = 404, description = "Airline or airport not found")
    )
)]
pub async fn add(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<AirlineWithAirports>), JsonApiError> {
    let result =
        airline_airport_service::add_airport_to_airline(&state.db, airport_id, airline_id).await?;
    info!(%airline_id, %airport_id, airports = result.airports.len(), "linked airport to airline");
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get, path = "/airlines/{airline_id}/airports", tag = "associations",
    params(("airline_id" = Uuid, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "Airport set of the airline"),
        (status = 404, description = "Airline not found")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Path(airline_id): Path<Uuid>,
) -> Result<Json<Vec<models::airport::Model>>, JsonApiError> {
    let airports =
        airline_airport_service::find_airports_from_airline(&state.db, airline_id).await?;
    Ok(Json(airports))
}

#[utoipa::path(
    get, path = "/airlines/{airline_id}/airports/{airport_id}", tag = "associations",
    params(
        ("airline_id" = Uuid, Path, description = "Airline ID"),
        ("airport_id" = Uuid, Path, description = "Airport ID")
    ),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Airline or airport not found"),
        (status = 412, description = "Airport not associated with the airline")
    )
)]
pub async fn get(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<models::airport::Model>, JsonApiError> {
    let airport =
        airline_airport_service::find_airport_from_airline(&state.db, airline_id, airport_id)
            .await?;
    Ok(Json(airport))
}

#[utoipa::path(
    put, path = "/airlines/{airline_id}/airports", tag = "associations",
    params(("airline_id" = Uuid, Path, description = "Airline ID")),
    request_body = Vec<crate::openapi::AirportRefDoc>,
    responses(
        (status = 200, description = "Association set replaced"),
        (status = 404, description = "Airline or one of the airports not found")
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    Path(airline_id): Path<Uuid>,
    Json(input): Json<Vec<AirportRef>>,
) -> Result<Json<AirlineWithAirports>, JsonApiError> {
    let ids: Vec<Uuid> = input.iter().map(|a| a.id).collect();
    let result =
        airline_airport_service::update_airports_from_airline(&state.db, airline_id, &ids).await?;
    info!(%airline_id, airports = result.airports.len(), "replaced airline airport set");
    Ok(Json(result))
}

#[utoipa::path(
    delete, path = "/airlines/{airline_id}/airports/{airport_id}", tag = "associations",
    params(
        ("airline_id" = Uuid, Path, description = "Airline ID"),
        ("airport_id" = Uuid, Path, description = "Airport ID")
    ),
    responses(
        (status = 204, description = "Edge removed"),
        (status = 404, description = "Airline or airport not found"),
        (status = 412, description = "Airport not associated with the airline")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    Path((airline_id, airport_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, JsonApiError> {
    airline_airport_service::delete_airport_from_airline(&state.db, airport_id, airline_id).await?;
    info!(%airline_id, %airport_id, "unlinked airport from airline");
    Ok(StatusCode::NO_CONTENT)
}
