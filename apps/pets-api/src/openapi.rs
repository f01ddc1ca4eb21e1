//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pets API",
        version = "0.1.0",
        description = "MongoDB-based REST API for managing pet profiles",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/pets", api = domain_pets::ApiDoc)
    ),
    tags(
        (name = "Pets", description = "Pet profile endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;
