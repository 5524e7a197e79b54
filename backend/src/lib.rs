//! Catalogue HTTP service.
//!
//! Serves deterministic synthetic books from `book_data` behind a hexagonal
//! layout: [`domain`] holds the error model and ports, [`inbound`] the actix
//! handlers, and [`outbound`] the engine adapter.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
