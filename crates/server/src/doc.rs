use crate::{
    dtos::resource::{ErrorResponse, ListResponse},
    routes::{health, resource, root},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        resource::list,
        resource::create,
        resource::fetch,
        resource::update,
        resource::remove
    ),
    components(schemas(ListResponse, ErrorResponse)),
    tags(
        (name = "Health", description = "Liveness endpoints"),
        (name = "Resources", description = "CRUD over customers, rooms, bookings and users"),
    ),
    info(
        title = "Hotels API",
        version = "1.0.0",
        description = "In-memory development server for the hotels front end",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
