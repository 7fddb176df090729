use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod airline_airports;
pub mod airlines;
pub mod airports;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, entity CRUD, association
/// management, and the swagger UI.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let health_routes = Router::new().route("/health", get(health));

    let airline_routes = Router::new()
        .route("/airlines", get(airlines::list).post(airlines::create))
        .route(
            "/airlines/:airline_id",
            get(airlines::get).put(airlines::update).delete(airlines::delete),
        );

    let airport_routes = Router::new()
        .route("/airports", get(airports::list).post(airports::create))
        .route(
            "/airports/:airport_id",
            get(airports::get).put(airports::update).delete(airports::delete),
        );

    let association_routes = Router::new()
        .route(
            "/airlines/:airline_id/airports",
            get(airline_airports::list).put(airline_airports::replace),
        )
        .route(
            "/airlines/:airline_id/airports/:airport_id",
            post(airline_airports::add)
                .get(airline_airports::get)
                .delete(airline_airports::remove),
        );

    let swagger = SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    health_routes
        .merge(airline_routes)
        .merge(airport_routes)
        .merge(association_routes)
        .merge(swagger)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
