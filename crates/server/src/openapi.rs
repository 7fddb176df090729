use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// Request-body mirrors for schema generation; the `models` crate stays free
// of utoipa derives.
#[derive(ToSchema)]
pub struct AirlineInputDoc {
    pub name: String,
    pub description: String,
    #[schema(value_type = String, format = Date)]
    pub founded_date: String,
    pub webpage: String,
}

#[derive(ToSchema)]
pub struct AirportInputDoc {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

#[derive(ToSchema)]
pub struct AirportRefDoc {
    pub id: Uuid,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::airlines::list,
        crate::routes::airlines::get,
        crate::routes::airlines::create,
        crate::routes::airlines::update,
        crate::routes::airlines::delete,
        crate::routes::airports::list,
        crate::routes::airports::get,
        crate::routes::airports::create,
        crate::routes::airports::update,
        crate::routes::airports::delete,
        crate::routes::airline_airports::add,
        crate::routes::airline_airports::list,
        crate::routes::airline_airports::get,
        crate::routes::airline_airports::replace,
        crate::routes::airline_airports::remove,
    ),
    components(
        schemas(
            HealthResponse,
            AirlineInputDoc,
            AirportInputDoc,
            AirportRefDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "airlines"),
        (name = "airports"),
        (name = "associations")
    )
)]
pub struct ApiDoc;
