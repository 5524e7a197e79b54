//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the catalogue and health endpoints together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{BookSchema, ErrorCodeSchema, ErrorSchema, ReviewSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookstore catalogue API",
        description = "Deterministic, paginated synthetic book catalogue."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::export_books,
        crate::inbound::http::books::random_seed,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(BookSchema, ReviewSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "books", description = "Generated catalogue pages and exports"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
