//! OpenAPI schema definitions for types that do not derive `ToSchema`.
//!
//! Neither the domain error nor the engine's records depend on utoipa. The
//! wrappers here mirror their serialised shape and register them under the
//! wrapped types' paths.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or exceeds a service limit.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "pageSize must be greater than zero")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and machine-readable reason, when known.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`book_data::Review`].
#[derive(ToSchema)]
#[schema(as = book_data::Review)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ReviewSchema {
    /// Review body.
    #[schema(example = "A refined read from start to finish.")]
    text: String,
    /// Reviewer display name.
    #[schema(example = "Charles Babbage")]
    reviewer: String,
}

/// OpenAPI schema for [`book_data::Book`].
#[derive(ToSchema)]
#[schema(as = book_data::Book)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookSchema {
    /// 1-based absolute index within the `(seed, locale)` space.
    #[schema(example = 41)]
    index: u64,
    /// ISBN-like identifier.
    #[schema(example = "978-12-34567-89012-3")]
    isbn: String,
    /// Title.
    #[schema(example = "Rustic Lantern")]
    title: String,
    /// One to three author names.
    authors: Vec<String>,
    /// Publisher name and year.
    #[schema(example = "Babbage Ltd, 1999")]
    publisher: String,
    /// Like count.
    likes: u32,
    /// Reviews, in order.
    reviews: Vec<ReviewSchema>,
    /// Cover image URL.
    image: String,
}
